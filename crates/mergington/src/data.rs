//! Data structures exchanged between the activity service and its clients.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::{ActivityName, ParticipantId};

/// One extracurricular activity and its current enrollment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Enrollment does not check it.
    pub max_participants: u32,
    /// Enrolled participants, in enrollment order. Never contains duplicates.
    pub participants: Vec<ParticipantId>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn is_enrolled(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Appends the participant unless already present. Returns whether it was added.
    pub fn add_participant(&mut self, participant: ParticipantId) -> bool {
        if self.is_enrolled(&participant) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Removes the participant if present. Returns whether it was removed.
    pub fn remove_participant(&mut self, participant: &ParticipantId) -> bool {
        match self.participants.iter().position(|p| p == participant) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remaining capacity; negative once the activity is over-subscribed.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// A point-in-time copy of every activity, keyed by name.
///
/// Serializes as a JSON object whose keys keep the catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    entries: Vec<(ActivityName, Activity)>,
}

impl ActivitySnapshot {
    pub fn new(entries: Vec<(ActivityName, Activity)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name, activity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivitySnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivitySnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitySnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    entries.push((ActivityName::from_string(name), activity));
                }
                Ok(ActivitySnapshot { entries })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Body of a successful sign-up or unregister call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(participant: &ParticipantId, activity: &ActivityName) -> Self {
        Self {
            message: format!("Signed up {participant} for {activity}"),
        }
    }

    pub fn unregistered(participant: &ParticipantId, activity: &ActivityName) -> Self {
        Self {
            message: format!("Unregistered {participant} from {activity}"),
        }
    }
}

/// Body of a rejected request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
