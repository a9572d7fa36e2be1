use crate::config::Config;
use crate::model::Assignments;
use crate::stats;

/// Recap of the problem as loaded, before solving.
pub fn display_input(config: &Config, students: usize) {
    let seats: i64 = config.tracks.iter().map(|t| t.capacity.max(0)).sum();
    println!(
        "{} tracks ({} seats) for {} students:",
        config.tracks.len(),
        seats,
        students
    );
    for track in &config.tracks {
        println!("  - {} ({} seats)", track.name, track.capacity);
    }
    let weights = config
        .periods
        .iter()
        .map(|p| format!("{}={}", p.name, p.weight))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Period weights: {weights}");
    println!();
}

pub fn display_details(a: &Assignments) {
    let mut tracks = a.tracks.clone();
    tracks.sort_by_key(|track| track.name.clone());
    for track in &tracks {
        let mut students = a.students_for(track.id).clone();
        students.sort_by_key(|&s| {
            let student = a.student(s);
            (student.last_name.clone(), student.first_name.clone())
        });
        println!(
            "{} ({}/{} seats taken):",
            track.name,
            a.size(track.id),
            track.capacity
        );
        for s in students {
            print!("  - {}", a.student(s).full_name());
            if let Some(rank) = a.rank_of(s, track.id) {
                print!(" (wish {})", rank + 1);
            }
            println!();
        }
        println!();
    }
}

pub fn display_stats(a: &Assignments) {
    let students = a.students.len();
    let unassigned = a.unassigned_students().len();
    println!(
        "Students assigned/unassigned/total: {}/{}/{}",
        students - unassigned,
        unassigned,
        students
    );
    let ranks = stats::statistics(a);
    let cumul = ranks.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    let total: usize = ranks.iter().sum();
    if total == 0 {
        return;
    }
    println!("Satisfied wishes:");
    for (rank, (n, c)) in ranks.iter().zip(cumul).enumerate() {
        if *n != 0 {
            println!(
                "  - wish {}: {} (cumulative {} - {:.2}%)",
                rank + 1,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
}
