//! The fixed set of activities offered at Mergington High School.
//!
//! The registry is seeded from this list once at startup; there is no way to
//! add or remove activities at runtime.

use mergington::data::Activity;
use mergington::id::{ActivityName, ParticipantId};

struct Seed {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    Seed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    Seed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    Seed {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    Seed {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    Seed {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    Seed {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    Seed {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    Seed {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Returns the seed catalog, in display order.
pub fn seed() -> Vec<(ActivityName, Activity)> {
    SEEDS
        .iter()
        .map(|seed| {
            let mut activity =
                Activity::new(seed.description, seed.schedule, seed.max_participants);
            activity.participants = seed
                .participants
                .iter()
                .map(|&p| ParticipantId::from(p))
                .collect();
            (ActivityName::from(seed.name), activity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ActivityServiceInMemory;

    #[test]
    fn seed_is_a_valid_catalog() {
        assert!(ActivityServiceInMemory::new(seed()).is_ok());
    }

    #[test]
    fn chess_club_is_seeded_first() {
        let catalog = seed();
        let (name, chess) = &catalog[0];
        assert_eq!(name, "Chess Club");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec![
                ParticipantId::from("michael@mergington.edu"),
                ParticipantId::from("daniel@mergington.edu"),
            ]
        );
    }

    #[test]
    fn seeds_start_under_capacity() {
        for (name, activity) in seed() {
            assert!(activity.spots_left() > 0, "{name} starts full");
        }
    }
}
