use httpmock::prelude::*;
use test_utils::{builder::TestBuilder, factory};

use super::backend_client;
use crate::server::service::trip::{TripApi, TripService};

/// Tests listing trips wrapped in the `$values` envelope.
///
/// Expected: Ok with the trip's dates and destination decoded
#[tokio::test]
async fn gets_preserved_trip_list() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    test.backend()
        .await
        .mock_async(|when, then| {
            when.method(GET).path("/api/trips");
            then.status(200).json_body(factory::helpers::preserved(vec![
                factory::trip::TripFactory::new()
                    .id(11)
                    .destination_id(4)
                    .build(),
            ]));
        })
        .await;

    let trips = TripApi::new(&backend, None).get_all_trips().await.unwrap();

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].id, 11);
    assert_eq!(trips[0].destination_id, 4);
    assert!(trips[0].end_date >= trips[0].start_date);
}

/// Tests that a backend outage is reported, not swallowed.
///
/// Expected: Err with status 500
#[tokio::test]
async fn server_error_is_returned() {
    let mut test = TestBuilder::new().with_backend().build().await;
    let backend = backend_client(&mut test).await;
    test.backend()
        .await
        .mock_async(|when, then| {
            when.method(GET).path("/api/trips/1");
            then.status(500).body("Database unavailable");
        })
        .await;

    let err = TripApi::new(&backend, None).get_trip(1).await.unwrap_err();

    assert_eq!(err.user_message(), "Database unavailable");
}
