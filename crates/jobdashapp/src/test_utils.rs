use crate::model::{Advertisement, Job, Portal, Recruiter};

fn job(id: &str, title: &str, status: &str, recruiter: &str, location: &str) -> Job {
    Job {
        id: id.to_string(),
        status: status.to_string(),
        location: location.to_string(),
        recruiter: Recruiter {
            name: recruiter.to_string(),
        },
        ..Job::new(title)
    }
}

fn portal(name: &str, published_at: &str, expires_at: &str) -> Portal {
    Portal {
        name: name.to_string(),
        published_at: Some(published_at.to_string()),
        expires_at: Some(expires_at.to_string()),
    }
}

/// A small, varied job list: every status, every derived ad status.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            advertisement: Some(Advertisement {
                active: true,
                portals: vec![portal("Jobs.cz", "2024-03-01", "2024-04-01")],
            }),
            ..job("1", "Účetní", "Aktivní", "Anna Kovářová", "Praha")
        },
        Job {
            advertisement: Some(Advertisement {
                active: false,
                portals: vec![portal("LinkedIn", "2024-01-10", "2024-02-10")],
            }),
            ..job("2", "Skladník", "Aktivní", "Petr Novák", "Brno")
        },
        job("3", "Vývojář", "Rozpracovaný", "Anna Kovářová", "Praha"),
        job("4", "Řidič", "Archivovaný", "Petr Novák", "Ostrava"),
        Job {
            advertisement: Some(Advertisement {
                active: true,
                portals: vec![
                    portal("Prace.cz", "2024-02-15", "2024-03-15"),
                    portal("Jobs.cz", "2024-02-20", "2024-03-20"),
                ],
            }),
            ..job("5", "Obchodní zástupce", "Aktivní", "Anna Kovářová", "Brno")
        },
    ]
}
