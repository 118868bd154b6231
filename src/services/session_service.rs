// src/services/session_service.rs

use std::{
    collections::{BTreeSet, HashMap, VecDeque},
    sync::Arc,
};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::session::{Capability, LoginPayload, LoginResponse, Session},
};

const DEFAULT_DISPLAY_NAME: &str = "Store Owner";

/// Validade e teto de sessões abertas (o login é público).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub ttl: Duration,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self { ttl: Duration::hours(8), max_sessions: 10_000 }
    }
}

impl SessionLimits {
    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.started_at >= self.ttl
    }
}

#[derive(Default)]
struct OpenSessions {
    by_id: HashMap<Uuid, Session>,
    // Ordem de login, mais antigas na frente
    order: VecDeque<Uuid>,
}

impl OpenSessions {
    fn remove(&mut self, id: &Uuid) -> Option<Session> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|queued| queued != id);
        Some(removed)
    }

    // Descarta as vencidas e, acima do teto, as mais antigas.
    fn evict(&mut self, limits: &SessionLimits, now: DateTime<Utc>, room_for: usize) {
        while let Some(oldest) = self.order.front().copied() {
            let expired = self
                .by_id
                .get(&oldest)
                .is_none_or(|session| limits.is_expired(session, now));
            let over_cap = self.by_id.len() + room_for > limits.max_sessions;
            if !expired && !over_cap {
                break;
            }
            self.order.pop_front();
            if self.by_id.remove(&oldest).is_some() {
                tracing::debug!("Sessão {} descartada ({})", oldest, if expired { "expirada" } else { "teto" });
            }
        }
    }
}

// Sessões abertas, chaveadas pelo token. Injetado no AppState.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<OpenSessions>>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self { sessions: Arc::default(), limits }
    }

    /// Abre uma sessão. Nenhuma credencial é conferida.
    pub async fn login(&self, payload: LoginPayload) -> LoginResponse {
        let capabilities: BTreeSet<Capability> = match payload.capabilities {
            Some(list) => list.into_iter().collect(),
            None => Capability::ALL.into_iter().collect(),
        };
        let display_name = payload
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        let session = Session {
            id: Uuid::new_v4(),
            display_name,
            capabilities,
            started_at: Utc::now(),
            sidebar_collapsed: false,
        };

        let mut sessions = self.sessions.write().await;
        sessions.evict(&self.limits, session.started_at, 1);
        sessions.by_id.insert(session.id, session.clone());
        sessions.order.push_back(session.id);
        drop(sessions);

        tracing::info!("🔑 Sessão aberta para '{}'", session.display_name);

        LoginResponse { token: session.id.to_string(), session }
    }

    pub async fn logout(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|session| tracing::info!("👋 Sessão de '{}' encerrada", session.display_name))
            .ok_or(AppError::InvalidSession)
    }

    pub async fn find(&self, token: &str) -> Result<Session, AppError> {
        let id = Uuid::parse_str(token).map_err(|_| AppError::InvalidSession)?;
        let session = self
            .sessions
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or(AppError::InvalidSession)?;

        if self.limits.is_expired(&session, Utc::now()) {
            self.sessions.write().await.remove(&id);
            tracing::info!("⌛ Sessão de '{}' expirada", session.display_name);
            return Err(AppError::InvalidSession);
        }
        Ok(session)
    }

    pub async fn toggle_sidebar(&self, id: Uuid) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.by_id.get_mut(&id).ok_or(AppError::InvalidSession)?;
        session.sidebar_collapsed = !session.sidebar_collapsed;
        Ok(session.clone())
    }
}
