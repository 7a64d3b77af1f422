use crate::{
    model::{
        destination::DestinationDto, guide::GuideDto, trip::TripDto,
        trip_registration::TripRegistrationDto,
    },
    server::{
        error::api::ApiError,
        service::{
            destination::DestinationService, guide::GuideService, trip::TripService,
            trip_registration::TripRegistrationService,
        },
    },
};

/// Backend services exercised by the diagnostic page.
pub struct ApiTestServices<'a> {
    pub destinations: &'a dyn DestinationService,
    pub trips: &'a dyn TripService,
    pub guides: &'a dyn GuideService,
    pub trip_registrations: &'a dyn TripRegistrationService,
}

/// State behind the backend diagnostic page.
///
/// Holds whatever each backend list call returned plus the message of the first failure.
/// Lists loaded before a failure keep their contents; lists after it stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiTestModel {
    pub destinations: Vec<DestinationDto>,
    pub trips: Vec<TripDto>,
    pub guides: Vec<GuideDto>,
    pub trip_registrations: Vec<TripRegistrationDto>,
    pub error_message: Option<String>,
}

impl ApiTestModel {
    /// Calls every list endpoint in turn and records the results.
    ///
    /// Calls run strictly one after another in the order destinations, trips, guides,
    /// trip registrations so a failure is attributed to exactly one endpoint. The first
    /// failure stops the sequence and is turned into `error_message`; the page itself
    /// always renders.
    pub async fn on_get(services: ApiTestServices<'_>) -> Self {
        let mut model = Self::default();

        if let Err(err) = model.load(&services).await {
            tracing::error!(error = ?err, "Error testing API: {}", err);
            model.error_message = Some(format!("Error: {}", err));
        }

        model
    }

    pub fn has_error(&self) -> bool {
        self.error_message
            .as_deref()
            .is_some_and(|message| !message.is_empty())
    }

    async fn load(&mut self, services: &ApiTestServices<'_>) -> Result<(), ApiError> {
        self.destinations = services.destinations.get_all_destinations().await?;
        tracing::info!(count = self.destinations.len(), "Loaded destinations");

        self.trips = services.trips.get_all_trips().await?;
        tracing::info!(count = self.trips.len(), "Loaded trips");

        self.guides = services.guides.get_all_guides().await?;
        tracing::info!(count = self.guides.len(), "Loaded guides");

        self.trip_registrations = services
            .trip_registrations
            .get_all_trip_registrations()
            .await?;
        tracing::info!(
            count = self.trip_registrations.len(),
            "Loaded trip registrations"
        );

        Ok(())
    }
}
