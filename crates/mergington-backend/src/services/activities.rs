use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivitySnapshot};
use mergington::errors::{CatalogError, RegistryError};
use mergington::id::{ActivityName, ParticipantId};
use mergington::log;

/// A registry of activities and the participants enrolled in them.
///
/// The set of activities is fixed when the registry is built; only the
/// participant list of an existing activity changes afterwards.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let chess = ActivityName::from("Chess Club");
///     let emma = ParticipantId::parse("emma@mergington.edu")?;
///
///     service.enroll(&chess, &emma).await?;
///     service.withdraw(&chess, &emma).await?;
///
///     let activities = service.list().await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity with its current participants.
    async fn list(&self) -> Result<ActivitySnapshot, Self::Error>;

    /// Returns a single activity.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get(&self, activity: &ActivityName) -> Result<Activity, Self::Error>;

    /// Appends a participant to the end of an activity's participant list.
    ///
    /// Not idempotent: enrolling the same participant twice fails the second time.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is
    /// already enrolled in it.
    async fn enroll(
        &self,
        activity: &ActivityName,
        participant: &ParticipantId,
    ) -> Result<(), Self::Error>;

    /// Removes a participant from an activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is
    /// not enrolled in it.
    async fn withdraw(
        &self,
        activity: &ActivityName,
        participant: &ParticipantId,
    ) -> Result<(), Self::Error>;

    /// Number of activities in the registry.
    async fn len(&self) -> usize;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Enroll and withdraw run their
/// check-then-mutate step while holding the entry's write guard, so two
/// concurrent calls on the same activity are serialized. State is lost when
/// the process exits.
pub struct ActivityServiceInMemory {
    activities: DashMap<ActivityName, Activity>,
    // Catalog order, used for listing.
    order: Vec<ActivityName>,
}

impl ActivityServiceInMemory {
    /// Builds a registry from a catalog of activities.
    ///
    /// # Errors
    ///
    /// Rejects catalogs that repeat an activity name, list a participant
    /// twice within one activity, or declare a zero capacity.
    pub fn new(
        catalog: impl IntoIterator<Item = (ActivityName, Activity)>,
    ) -> Result<Self, CatalogError> {
        let activities = DashMap::new();
        let mut order = Vec::new();

        for (name, activity) in catalog {
            if activity.max_participants == 0 {
                return Err(CatalogError::ZeroCapacity(name.into_string()));
            }
            for (index, participant) in activity.participants.iter().enumerate() {
                if activity.participants[..index].contains(participant) {
                    return Err(CatalogError::DuplicateParticipant {
                        activity: name.into_string(),
                        participant: participant.to_string(),
                    });
                }
            }
            if activities.contains_key(&name) {
                return Err(CatalogError::DuplicateActivity(name.into_string()));
            }
            order.push(name.clone());
            activities.insert(name, activity);
        }

        Ok(Self { activities, order })
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = RegistryError;

    async fn list(&self) -> Result<ActivitySnapshot, Self::Error> {
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect();
        Ok(ActivitySnapshot::new(entries))
    }

    async fn get(&self, activity: &ActivityName) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::NotFound(activity.to_string()))
    }

    async fn enroll(
        &self,
        activity: &ActivityName,
        participant: &ParticipantId,
    ) -> Result<(), Self::Error> {
        let mut entry = self.activities.get_mut(activity).ok_or_else(|| {
            log::debug!("Enroll rejected, unknown activity {:?}", activity);
            RegistryError::NotFound(activity.to_string())
        })?;

        if !entry.add_participant(participant.clone()) {
            log::debug!("{} is already enrolled in {}", participant, activity);
            return Err(RegistryError::AlreadyEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }

        log::info!(
            "Enrolled {} in {} ({}/{})",
            participant,
            activity,
            entry.participants.len(),
            entry.max_participants
        );
        Ok(())
    }

    async fn withdraw(
        &self,
        activity: &ActivityName,
        participant: &ParticipantId,
    ) -> Result<(), Self::Error> {
        let mut entry = self.activities.get_mut(activity).ok_or_else(|| {
            log::debug!("Withdraw rejected, unknown activity {:?}", activity);
            RegistryError::NotFound(activity.to_string())
        })?;

        if !entry.remove_participant(participant) {
            log::debug!("{} is not enrolled in {}", participant, activity);
            return Err(RegistryError::NotEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }

        log::info!("Withdrew {} from {}", participant, activity);
        Ok(())
    }

    async fn len(&self) -> usize {
        self.activities.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::catalog;

    fn registry() -> ActivityServiceInMemory {
        ActivityServiceInMemory::new(catalog::seed()).unwrap()
    }

    fn chess() -> ActivityName {
        ActivityName::from("Chess Club")
    }

    fn participant(value: &str) -> ParticipantId {
        ParticipantId::parse(value).unwrap()
    }

    fn assert_no_duplicates(snapshot: &ActivitySnapshot) {
        for (name, activity) in snapshot.iter() {
            let unique: HashSet<_> = activity.participants.iter().collect();
            assert_eq!(
                unique.len(),
                activity.participants.len(),
                "duplicate participant in {name}"
            );
        }
    }

    #[tokio::test]
    async fn list_returns_catalog_in_order() {
        let service = registry();
        let snapshot = service.list().await.unwrap();

        let names: Vec<_> = snapshot.names().map(|n| n.to_string()).collect();
        let expected: Vec<_> = catalog::seed()
            .into_iter()
            .map(|(n, _)| n.to_string())
            .collect();
        assert_eq!(names, expected);
        assert_eq!(service.len().await, expected.len());
        assert_eq!(snapshot.len(), expected.len());
        assert_no_duplicates(&snapshot);

        let chess_club = snapshot.get("Chess Club").unwrap();
        assert_eq!(chess_club.max_participants, 12);
        assert_eq!(chess_club.participants.len(), 2);
        assert!(snapshot.get("chess club").is_none());
    }

    #[tokio::test]
    async fn chess_club_scenario() {
        let service = registry();

        service
            .enroll(&chess(), &participant("pytest.user@example.com"))
            .await
            .unwrap();
        let snapshot = service.list().await.unwrap();
        let club = snapshot.get("Chess Club").unwrap();
        assert_eq!(
            club.participants,
            vec![
                participant("michael@mergington.edu"),
                participant("daniel@mergington.edu"),
                participant("pytest.user@example.com"),
            ]
        );

        let err = service
            .enroll(&chess(), &participant("michael@mergington.edu"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyEnrolled { .. }));
        assert_eq!(service.get(&chess()).await.unwrap().participants.len(), 3);

        service
            .withdraw(&chess(), &participant("daniel@mergington.edu"))
            .await
            .unwrap();
        let club = service.get(&chess()).await.unwrap();
        assert_eq!(club.participants.len(), 2);
        assert!(!club.is_enrolled(&participant("daniel@mergington.edu")));

        let err = service
            .withdraw(&chess(), &participant("nonexistent@example.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotEnrolled {
                activity: "Chess Club".to_string(),
                participant: "nonexistent@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn enroll_then_withdraw_restores_prior_state() {
        let service = registry();
        let before = service.list().await.unwrap();

        let emma = participant("emma.new@mergington.edu");
        service.enroll(&chess(), &emma).await.unwrap();
        service.withdraw(&chess(), &emma).await.unwrap();

        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn whitespace_participant_is_an_ordinary_id() {
        let service = registry();
        let blank = participant(" ");

        service.enroll(&chess(), &blank).await.unwrap();
        let err = service.enroll(&chess(), &blank).await.unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyEnrolled { .. }));
        service.withdraw(&chess(), &blank).await.unwrap();
    }

    #[tokio::test]
    async fn withdraw_twice_fails_second_time() {
        let service = registry();
        let michael = participant("michael@mergington.edu");

        service.withdraw(&chess(), &michael).await.unwrap();
        let err = service.withdraw(&chess(), &michael).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotEnrolled { .. }));
    }

    #[tokio::test]
    async fn unknown_activity_leaves_registry_untouched() {
        let service = registry();
        let before = service.list().await.unwrap();
        let unknown = ActivityName::from("Underwater Basket Weaving");
        let someone = participant("someone@example.com");

        assert_eq!(
            service.enroll(&unknown, &someone).await,
            Err(RegistryError::NotFound(unknown.to_string()))
        );
        assert_eq!(
            service.withdraw(&unknown, &someone).await,
            Err(RegistryError::NotFound(unknown.to_string()))
        );
        assert!(service.get(&unknown).await.is_err());
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn activity_names_are_case_sensitive() {
        let service = registry();
        let err = service
            .enroll(&ActivityName::from("chess club"), &participant("a@b.c"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[tokio::test]
    async fn same_participant_may_join_several_activities() {
        let service = registry();
        let sam = participant("sam@mergington.edu");

        service.enroll(&chess(), &sam).await.unwrap();
        service
            .enroll(&ActivityName::from("Gym Class"), &sam)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let service = ActivityServiceInMemory::new([(
            ActivityName::from("Tiny"),
            Activity::new("One seat", "Never", 1),
        )])
        .unwrap();
        let tiny = ActivityName::from("Tiny");

        service.enroll(&tiny, &participant("a@b.c")).await.unwrap();
        service.enroll(&tiny, &participant("d@e.f")).await.unwrap();
        assert_eq!(service.get(&tiny).await.unwrap().spots_left(), -1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_enrolls_admit_one() {
        let service = Arc::new(registry());
        let racer = participant("racer@example.com");

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = service.clone();
                let racer = racer.clone();
                tokio::spawn(async move { service.enroll(&chess(), &racer).await })
            })
            .collect();

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        let club = service.get(&chess()).await.unwrap();
        assert_eq!(club.participants.iter().filter(|p| **p == racer).count(), 1);
    }

    #[test]
    fn rejects_duplicate_activity() {
        let result = ActivityServiceInMemory::new([
            (ActivityName::from("Chess Club"), Activity::new("a", "b", 1)),
            (ActivityName::from("Chess Club"), Activity::new("c", "d", 2)),
        ]);
        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateActivity("Chess Club".to_string()))
        );
    }

    #[test]
    fn rejects_duplicate_seed_participant() {
        let mut activity = Activity::new("a", "b", 5);
        activity.participants = vec![participant("x@y.z"), participant("x@y.z")];
        let result =
            ActivityServiceInMemory::new([(ActivityName::from("Art Club"), activity)]);
        assert!(matches!(
            result.err(),
            Some(CatalogError::DuplicateParticipant { .. })
        ));
    }

    #[test]
    fn rejects_zero_capacity() {
        let result = ActivityServiceInMemory::new([(
            ActivityName::from("Void"),
            Activity::new("a", "b", 0),
        )]);
        assert_eq!(
            result.err(),
            Some(CatalogError::ZeroCapacity("Void".to_string()))
        );
    }
}
