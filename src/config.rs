// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{
    common::clock::{Clock, SystemClock},
    db::{
        seed, InMemoryAlertRepository, InMemoryInventoryRepository, InMemoryOrderRepository,
        InMemorySettingsRepository, InMemoryStoreRepository, StaticAnalyticsRepository,
    },
    services::{
        alert_service::AlertService, analytics_service::AnalyticsService,
        inventory_service::InventoryService, order_service::OrderService,
        session_service::{SessionLimits, SessionStore},
        settings_service::SettingsService,
        status::StatusRules,
        store_service::StoreService,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_addr: String,
    pub seed_mock_data: bool,
    pub status_rules: StatusRules,
    pub session_limits: SessionLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            seed_mock_data: true,
            status_rules: StatusRules::default(),
            session_limits: SessionLimits::default(),
        }
    }
}

fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} inválida: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Lê o `.env` (se houver) e as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            seed_mock_data: var_or("SEED_MOCK_DATA", defaults.seed_mock_data)?,
            status_rules: StatusRules {
                low_stock_threshold: var_or(
                    "LOW_STOCK_THRESHOLD",
                    defaults.status_rules.low_stock_threshold,
                )?,
                expiry_window_days: var_or(
                    "EXPIRY_WINDOW_DAYS",
                    defaults.status_rules.expiry_window_days,
                )?,
            },
            session_limits: SessionLimits {
                ttl: chrono::Duration::minutes(var_or(
                    "SESSION_TTL_MINUTES",
                    defaults.session_limits.ttl.num_minutes(),
                )?),
                max_sessions: var_or("MAX_SESSIONS", defaults.session_limits.max_sessions)?,
            },
        })
    }
}

// O estado compartilhado: raiz de composição de sessões, serviços e repositórios.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub inventory_service: InventoryService,
    pub order_service: OrderService,
    pub store_service: StoreService,
    pub alert_service: AlertService,
    pub analytics_service: AnalyticsService,
    pub settings_service: SettingsService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        // --- Monta o gráfico de dependências ---
        let (inventory, orders, stores, alerts) = if config.seed_mock_data {
            (seed::inventory(), seed::orders(), seed::stores(), seed::alerts())
        } else {
            (Vec::new(), Vec::new(), Vec::new(), Vec::new())
        };

        let inventory_service = InventoryService::new(
            Arc::new(InMemoryInventoryRepository::new(inventory)),
            config.status_rules,
            clock.clone(),
        );
        let order_service = OrderService::new(Arc::new(InMemoryOrderRepository::new(orders)), clock);
        let store_service = StoreService::new(Arc::new(InMemoryStoreRepository::new(stores)));
        let alert_service = AlertService::new(Arc::new(InMemoryAlertRepository::new(alerts)));
        let analytics_service = AnalyticsService::new(Arc::new(StaticAnalyticsRepository));
        let settings_service = SettingsService::new(Arc::new(InMemorySettingsRepository::default()));

        tracing::info!(
            "✅ Estado montado (dados de exemplo: {})",
            if config.seed_mock_data { "sim" } else { "não" }
        );

        Self {
            sessions: SessionStore::new(config.session_limits),
            inventory_service,
            order_service,
            store_service,
            alert_service,
            analytics_service,
            settings_service,
        }
    }
}
