mod client;
mod error;

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{domain::VehicleRecord, form::SubmitRequest};

pub use client::RegistryClient;
pub use error::{ApiError, NO_DETAIL_FALLBACK, extract_detail};

/// Which mutation a submission performed, for the completion banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
}

/// Completion of a background remote call, delivered to the UI loop.
///
/// Each spawned request sends exactly one of these. The loop owns all state;
/// tasks never touch it directly.
#[derive(Debug)]
pub enum ApiEvent {
    Refreshed(Result<Vec<VehicleRecord>, ApiError>),
    Submitted {
        kind: MutationKind,
        result: Result<(), ApiError>,
    },
    Deleted(Result<(), ApiError>),
}

/// Spawns registry calls and reports their completions over a channel.
#[derive(Clone)]
pub struct ApiHandle {
    client: Arc<RegistryClient>,
    sender: UnboundedSender<ApiEvent>,
}

impl ApiHandle {
    pub fn channel(client: RegistryClient) -> (Self, UnboundedReceiver<ApiEvent>) {
        let (sender, receiver) = unbounded_channel();
        (
            Self {
                client: Arc::new(client),
                sender,
            },
            receiver,
        )
    }

    pub fn refresh(&self) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = client.list_vehicles().await;
            let _ = sender.send(ApiEvent::Refreshed(result));
        });
    }

    pub fn submit(&self, request: SubmitRequest) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let (kind, result) = match request {
                SubmitRequest::Create(payload) => (
                    MutationKind::Create,
                    client.create_vehicle(&payload).await,
                ),
                SubmitRequest::Update { id, payload } => (
                    MutationKind::Update,
                    client.update_vehicle(id, &payload).await,
                ),
            };
            let _ = sender.send(ApiEvent::Submitted { kind, result });
        });
    }

    pub fn delete(&self, id: i64) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = client.delete_vehicle(id).await;
            let _ = sender.send(ApiEvent::Deleted(result));
        });
    }
}
