use crate::algos::Outcome;
use crate::model::Assignment;
use crate::stats::Workload;

pub fn display_summary(outcome: &Outcome) {
    println!(
        "Feasible assignments: {} out of {} candidates",
        outcome.feasible.len(),
        outcome.candidates
    );
    println!();
}

pub fn display_assignments(assignments: &[Assignment]) {
    for (i, assignment) in assignments.iter().enumerate() {
        println!("Possible project assignment #{}:", i + 1);
        print!("{assignment}");
        println!();
    }
}

pub fn display_stats(stats: &[Workload]) {
    if stats.is_empty() {
        return;
    }
    println!("Workload across displayed assignments:");
    for w in stats {
        let roles = if w.min_roles == w.max_roles {
            format!("{}", w.min_roles)
        } else {
            format!("{}-{}", w.min_roles, w.max_roles)
        };
        println!("  - {}: {} role(s), led {} project(s)", w.person, roles, w.led);
    }
}

/// Explain why too few feasible assignments exist.
pub fn display_shortage(outcome: &Outcome) {
    let unled = outcome.unled_projects().collect::<Vec<_>>();
    if !unled.is_empty() {
        println!("Projects nobody volunteered to lead:");
        for project in &unled {
            println!("  - {project}");
        }
    }
    let teamless = outcome
        .diagnostics
        .iter()
        .filter(|d| !d.is_unled() && d.teams == 0)
        .collect::<Vec<_>>();
    if !teamless.is_empty() {
        println!("Projects whose leads have nobody to work with:");
        for d in &teamless {
            println!("  - {} ({} interested)", d.project, d.member_candidates);
        }
    }
    if !outcome.idle_members.is_empty() {
        println!("Team members not interested in any project:");
        for member in &outcome.idle_members {
            println!("  - {member}");
        }
    }
    if unled.is_empty() && teamless.is_empty() && outcome.idle_members.is_empty() {
        println!(
            "Every project can be staffed: the limits on members per project and projects per person are too strict."
        );
    }
}
