//! Cascade resolver behavior tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use client::cascade::CascadeResolver;
use client::locations::LocationSource;
use common::{AppError, AppResult};
use domain::{FetchStatus, LocationNode, Tier, ALL_TIERS};

mock! {
    Locations {}

    #[async_trait]
    impl LocationSource for Locations {
        async fn children(
            &self,
            tier: Tier,
            parent_id: Option<Uuid>,
        ) -> AppResult<Vec<LocationNode>>;
    }
}

fn node(id: Uuid, name: &str, parent_id: Option<Uuid>) -> LocationNode {
    LocationNode {
        id,
        name_fa: name.to_string(),
        code: "01".to_string(),
        parent_id,
    }
}

#[tokio::test]
async fn selecting_a_state_fetches_its_cities() {
    let tehran = Uuid::new_v4();
    let tehran_city = Uuid::new_v4();

    let mut source = MockLocations::new();
    source
        .expect_children()
        .with(eq(Tier::State), eq(None::<Uuid>))
        .returning(move |_, _| Ok(vec![node(tehran, "تهران", None)]));
    source
        .expect_children()
        .with(eq(Tier::City), eq(Some(tehran)))
        .returning(move |_, _| Ok(vec![node(tehran_city, "شهر تهران", Some(tehran))]));

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();
    resolver.select(Tier::State, Some(tehran)).await.unwrap();

    assert_eq!(resolver.selection(Tier::State), Some(tehran));
    assert_eq!(resolver.options(Tier::City).len(), 1);
    assert_eq!(resolver.state().fetch_status(Tier::City), FetchStatus::Loaded);
}

#[tokio::test]
async fn changing_the_state_resets_every_descendant() {
    let tehran = Uuid::new_v4();
    let isfahan = Uuid::new_v4();
    let tehran_city = Uuid::new_v4();
    let isfahan_city = Uuid::new_v4();

    let mut source = MockLocations::new();
    source
        .expect_children()
        .with(eq(Tier::State), eq(None::<Uuid>))
        .returning(move |_, _| {
            Ok(vec![
                node(tehran, "تهران", None),
                node(isfahan, "اصفهان", None),
            ])
        });
    source
        .expect_children()
        .with(eq(Tier::City), eq(Some(tehran)))
        .returning(move |_, _| Ok(vec![node(tehran_city, "شهر تهران", Some(tehran))]));
    source
        .expect_children()
        .with(eq(Tier::County), eq(Some(tehran_city)))
        .returning(|_, _| Ok(vec![]));
    source
        .expect_children()
        .with(eq(Tier::City), eq(Some(isfahan)))
        .returning(move |_, _| Ok(vec![node(isfahan_city, "شهر اصفهان", Some(isfahan))]));

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();
    resolver.select(Tier::State, Some(tehran)).await.unwrap();
    resolver.select(Tier::City, Some(tehran_city)).await.unwrap();
    assert_eq!(resolver.selection(Tier::City), Some(tehran_city));

    // Switching the state mid-flow must drop the stale city selection and
    // leave only the new state's options selectable.
    resolver.select(Tier::State, Some(isfahan)).await.unwrap();

    assert_eq!(resolver.selection(Tier::City), None);
    assert!(!resolver.state().contains_option(Tier::City, tehran_city));
    assert!(resolver.state().contains_option(Tier::City, isfahan_city));
    for tier in &ALL_TIERS[Tier::County.index()..] {
        assert_eq!(resolver.selection(*tier), None);
        assert!(resolver.options(*tier).is_empty());
        assert_eq!(resolver.state().fetch_status(*tier), FetchStatus::Idle);
    }
}

#[tokio::test]
async fn failed_fetch_marks_the_tier_failed_and_keeps_it_empty() {
    let tehran = Uuid::new_v4();

    let mut source = MockLocations::new();
    source
        .expect_children()
        .with(eq(Tier::State), eq(None::<Uuid>))
        .returning(move |_, _| Ok(vec![node(tehran, "تهران", None)]));
    source
        .expect_children()
        .with(eq(Tier::City), eq(Some(tehran)))
        .returning(|_, _| Err(AppError::from_status(500, "server error".to_string())));

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();

    let result = resolver.select(Tier::State, Some(tehran)).await;
    assert!(result.is_err());

    // The ancestor selection survives; the failed child list stays empty
    // and distinguishable from a loaded-but-empty one.
    assert_eq!(resolver.selection(Tier::State), Some(tehran));
    assert!(resolver.options(Tier::City).is_empty());
    assert_eq!(resolver.state().fetch_status(Tier::City), FetchStatus::Failed);
}

#[tokio::test]
async fn childless_parent_is_loaded_not_failed() {
    let tehran = Uuid::new_v4();

    let mut source = MockLocations::new();
    source
        .expect_children()
        .with(eq(Tier::State), eq(None::<Uuid>))
        .returning(move |_, _| Ok(vec![node(tehran, "تهران", None)]));
    source
        .expect_children()
        .with(eq(Tier::City), eq(Some(tehran)))
        .returning(|_, _| Ok(vec![]));

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();
    resolver.select(Tier::State, Some(tehran)).await.unwrap();

    assert_eq!(resolver.state().fetch_status(Tier::City), FetchStatus::Loaded);
    assert!(resolver.options(Tier::City).is_empty());
    assert!(!resolver.state().is_enabled(Tier::County));
}

#[tokio::test]
async fn unknown_value_is_rejected_without_a_fetch() {
    let tehran = Uuid::new_v4();

    let mut source = MockLocations::new();
    source
        .expect_children()
        .with(eq(Tier::State), eq(None::<Uuid>))
        .returning(move |_, _| Ok(vec![node(tehran, "تهران", None)]));
    // No City expectation: a fetch for the stranger would panic the mock.

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();

    let result = resolver.select(Tier::State, Some(Uuid::new_v4())).await;
    assert!(result.is_err());
    assert_eq!(resolver.selection(Tier::State), None);
}

#[tokio::test]
async fn registration_is_gated_on_a_complete_chain_through_school() {
    let ids: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

    let mut source = MockLocations::new();
    for (index, tier) in ALL_TIERS.iter().enumerate() {
        let child_id = ids[index];
        let parent_id = index.checked_sub(1).map(|i| ids[i]);
        source
            .expect_children()
            .with(eq(*tier), eq(parent_id))
            .returning(move |_, parent| Ok(vec![node(child_id, "گزینه", parent)]));
    }

    let mut resolver = CascadeResolver::new(Arc::new(source));
    resolver.load_states().await.unwrap();

    for (index, tier) in ALL_TIERS.iter().enumerate() {
        assert!(!resolver.is_complete_through(Tier::School));
        resolver.select(*tier, Some(ids[index])).await.unwrap();
    }

    assert!(resolver.is_complete_through(Tier::School));

    // Clearing the district re-locks the school and the submission.
    resolver.select(Tier::District, None).await.unwrap();
    assert!(!resolver.is_complete_through(Tier::School));
    assert!(!resolver.state().is_enabled(Tier::School));
}
