use cyclecare::commands::{daily_log, onboarding};
use cyclecare::store::{MemoryStore, ProfileStore};
use cyclecare::{Craving, LogEntry, Mood, UserProfile};

fn onboarding_form() -> onboarding::OnboardingForm {
    onboarding::OnboardingForm {
        age: 25,
        last_period_date: "2024-01-01".to_string(),
        ..onboarding::OnboardingForm::default()
    }
}

fn entry(date: &str, mood: Option<Mood>) -> LogEntry {
    LogEntry {
        date: date.to_string(),
        symptoms: vec!["Cramps".to_string()],
        mood,
        cravings: Some(Craving::Sweet),
    }
}

async fn onboarded_store() -> (MemoryStore, UserProfile) {
    let store = MemoryStore::new();
    let profile = onboarding::complete(&store, onboarding_form())
        .await
        .expect("onboarding should succeed");
    (store, profile)
}

#[tokio::test]
async fn onboarding_creates_the_profile_document() {
    let (store, profile) = onboarded_store().await;
    assert!(profile.onboarded);
    assert!(profile.symptoms_log.is_empty());
    assert_eq!(profile.cycle_length, Some(28));

    let stored = store.load().await.unwrap().expect("document should exist");
    assert_eq!(stored, profile);
}

#[tokio::test]
async fn saving_twice_for_one_date_keeps_the_second_entry() {
    let (store, profile) = onboarded_store().await;

    daily_log::save_daily_log(&store, &profile, entry("2024-01-10", Some(Mood::Sad)))
        .await
        .unwrap();
    let profile = store.load().await.unwrap().unwrap();

    let second = entry("2024-01-10", Some(Mood::Happy));
    daily_log::save_daily_log(&store, &profile, second.clone())
        .await
        .unwrap();

    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.symptoms_log.len(), 1);
    assert_eq!(stored.symptoms_log[0], second);
}

#[tokio::test]
async fn entries_for_other_dates_are_kept() {
    let (store, profile) = onboarded_store().await;
    daily_log::save_daily_log(&store, &profile, entry("2024-01-10", None))
        .await
        .unwrap();
    let profile = store.load().await.unwrap().unwrap();
    daily_log::save_daily_log(&store, &profile, entry("2024-01-11", None))
        .await
        .unwrap();

    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.symptoms_log.len(), 2);
}

#[tokio::test]
async fn store_failure_is_surfaced_and_nothing_is_written() {
    let (store, profile) = onboarded_store().await;
    store.fail_writes(true);

    let result = daily_log::save_daily_log(&store, &profile, entry("2024-01-10", None)).await;
    let err = result.expect_err("write should fail");
    assert!(err.is_store_failure());

    // No automatic retry happened and the log is untouched.
    store.fail_writes(false);
    let stored = store.load().await.unwrap().unwrap();
    assert!(stored.symptoms_log.is_empty());
}

#[tokio::test]
async fn log_save_requires_an_existing_document() {
    let store = MemoryStore::new();
    // A profile value the caller still holds, though nothing is stored.
    let profile = onboarding::complete(&MemoryStore::new(), onboarding_form())
        .await
        .unwrap();

    let result = daily_log::save_daily_log(&store, &profile, entry("2024-01-10", None)).await;
    assert!(result.expect_err("patch without document").is_store_failure());
}

#[tokio::test]
async fn malformed_entry_date_is_rejected_before_the_store() {
    let (store, profile) = onboarded_store().await;
    let result = daily_log::save_daily_log(&store, &profile, entry("tomorrow", None)).await;
    assert!(matches!(
        result,
        Err(cyclecare::Error::InvalidInput { field: "date", .. })
    ));
}

#[tokio::test]
async fn subscription_observes_writes() {
    let store = MemoryStore::new();
    let mut rx = store.subscribe();
    assert!(rx.borrow().is_none());

    onboarding::complete(&store, onboarding_form()).await.unwrap();
    rx.changed().await.unwrap();
    let seen = rx.borrow().clone().expect("profile should be visible");
    assert!(seen.onboarded);

    let profile = store.load().await.unwrap().unwrap();
    daily_log::save_daily_log(&store, &profile, entry("2024-01-10", Some(Mood::Okay)))
        .await
        .unwrap();
    rx.changed().await.unwrap();
    let seen = rx.borrow().clone().unwrap();
    assert_eq!(seen.symptoms_log.len(), 1);
}
