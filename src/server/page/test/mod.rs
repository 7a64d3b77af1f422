use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::{
    model::{
        destination::{DestinationDto, DestinationRequestDto},
        guide::{GuideDto, GuideRequestDto},
        trip::{TripDto, TripRequestDto},
        trip_registration::{CreateTripRegistrationDto, TripRegistrationDto},
    },
    server::{
        error::{api::ApiError, AppError},
        page::{
            api_test::{ApiTestModel, ApiTestServices},
            logout::LogoutModel,
        },
        service::{
            auth::AuthService, destination::DestinationService, guide::GuideService,
            trip::TripService, trip_registration::TripRegistrationService,
        },
    },
};

mod logout;

/// Auth service whose session state lives in memory.
struct FakeAuth {
    authenticated: AtomicBool,
    logout_calls: AtomicUsize,
    fail_logout: bool,
}

impl FakeAuth {
    fn new(authenticated: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
            logout_calls: AtomicUsize::new(0),
            fail_logout: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail_logout: true,
            ..Self::new(true)
        }
    }

    fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthService for FakeAuth {
    async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.authenticated.load(Ordering::SeqCst))
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            return Err(AppError::InternalError("session store unavailable".to_string()));
        }
        self.authenticated.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// What a fake list endpoint returns.
#[derive(Clone)]
enum Outcome {
    Items(usize),
    Fail(&'static str),
}

/// Backend fake implementing every list endpoint the diagnostic page uses.
///
/// Records the order in which endpoints were called.
struct FakeBackend {
    destinations: Outcome,
    trips: Outcome,
    guides: Outcome,
    trip_registrations: Outcome,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeBackend {
    fn new(destinations: Outcome, trips: Outcome, guides: Outcome, trip_registrations: Outcome) -> Self {
        Self {
            destinations,
            trips,
            guides,
            trip_registrations,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn services(&self) -> ApiTestServices<'_> {
        ApiTestServices {
            destinations: self,
            trips: self,
            guides: self,
            trip_registrations: self,
        }
    }

    fn respond<T>(
        &self,
        endpoint: &'static str,
        outcome: &Outcome,
        make: fn(i32) -> T,
    ) -> Result<Vec<T>, ApiError> {
        self.calls.lock().unwrap().push(endpoint);

        match outcome {
            Outcome::Items(count) => Ok((1..=*count as i32).map(make).collect()),
            Outcome::Fail(message) => Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            }),
        }
    }
}

fn destination(id: i32) -> DestinationDto {
    DestinationDto {
        id,
        name: format!("Destination {}", id),
        description: String::new(),
        country: "Portugal".to_string(),
        city: "Porto".to_string(),
        image_url: None,
    }
}

fn trip(id: i32) -> TripDto {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    TripDto {
        id,
        name: format!("Trip {}", id),
        description: String::new(),
        start_date: start,
        end_date: start,
        price: 100.0,
        capacity: 10,
        available_spots: 10,
        destination_id: 1,
        destination_name: None,
        image_url: None,
    }
}

fn guide(id: i32) -> GuideDto {
    GuideDto {
        id,
        first_name: "Guide".to_string(),
        last_name: id.to_string(),
        email: String::new(),
        phone: None,
        bio: None,
        years_of_experience: 3,
    }
}

fn trip_registration(id: i32) -> TripRegistrationDto {
    TripRegistrationDto {
        id,
        trip_id: 1,
        user_id: 1,
        registration_date: NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        number_of_participants: 1,
        total_price: 100.0,
        status: "Confirmed".to_string(),
        trip_name: None,
        username: None,
    }
}

#[async_trait]
impl DestinationService for FakeBackend {
    async fn get_all_destinations(&self) -> Result<Vec<DestinationDto>, ApiError> {
        self.respond("destinations", &self.destinations, destination)
    }

    async fn get_destination(&self, _id: i32) -> Result<DestinationDto, ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn create_destination(&self, _request: &DestinationRequestDto) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn update_destination(
        &self,
        _id: i32,
        _request: &DestinationRequestDto,
    ) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn delete_destination(&self, _id: i32) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }
}

#[async_trait]
impl TripService for FakeBackend {
    async fn get_all_trips(&self) -> Result<Vec<TripDto>, ApiError> {
        self.respond("trips", &self.trips, trip)
    }

    async fn get_trip(&self, _id: i32) -> Result<TripDto, ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn create_trip(&self, _request: &TripRequestDto) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn update_trip(&self, _id: i32, _request: &TripRequestDto) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn delete_trip(&self, _id: i32) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }
}

#[async_trait]
impl GuideService for FakeBackend {
    async fn get_all_guides(&self) -> Result<Vec<GuideDto>, ApiError> {
        self.respond("guides", &self.guides, guide)
    }

    async fn get_guide(&self, _id: i32) -> Result<GuideDto, ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn create_guide(&self, _request: &GuideRequestDto) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn update_guide(&self, _id: i32, _request: &GuideRequestDto) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn delete_guide(&self, _id: i32) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }
}

#[async_trait]
impl TripRegistrationService for FakeBackend {
    async fn get_all_trip_registrations(&self) -> Result<Vec<TripRegistrationDto>, ApiError> {
        self.respond(
            "trip_registrations",
            &self.trip_registrations,
            trip_registration,
        )
    }

    async fn create_trip_registration(
        &self,
        _request: &CreateTripRegistrationDto,
    ) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }

    async fn delete_trip_registration(&self, _id: i32) -> Result<(), ApiError> {
        unreachable!("not used by the diagnostic page")
    }
}
