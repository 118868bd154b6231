// src/middleware/capability.rs

use std::marker::PhantomData;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    common::error::AppError,
    models::session::{Capability, Session},
};

/// 1. O Trait que liga um tipo marcador a uma Capability
pub trait CapabilityDef: Send + Sync + 'static {
    fn capability() -> Capability;
}

/// 2. O Extractor (Guardião). Depende do `session_guard` ter rodado antes.
pub struct RequireCapability<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireCapability<T>
where
    T: CapabilityDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AppError::InvalidSession)?;

        let required = T::capability();
        if !session.can(required) {
            tracing::warn!("⛔ '{}' sem a capacidade '{}'", session.display_name, required.slug());
            return Err(AppError::MissingCapability(required.slug()));
        }

        Ok(RequireCapability(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS CAPACIDADES (TIPOS)
// ---
macro_rules! capability_marker {
    ($name:ident => $capability:ident) => {
        pub struct $name;
        impl CapabilityDef for $name {
            fn capability() -> Capability {
                Capability::$capability
            }
        }
    };
}

capability_marker!(CapDashboardView => DashboardView);
capability_marker!(CapInventoryRead => InventoryRead);
capability_marker!(CapInventoryWrite => InventoryWrite);
capability_marker!(CapOrdersRead => OrdersRead);
capability_marker!(CapOrdersWrite => OrdersWrite);
capability_marker!(CapAnalyticsView => AnalyticsView);
capability_marker!(CapAlertsRead => AlertsRead);
capability_marker!(CapAlertsWrite => AlertsWrite);
capability_marker!(CapStoresRead => StoresRead);
capability_marker!(CapSettingsManage => SettingsManage);
