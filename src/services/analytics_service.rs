// src/services/analytics_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::AnalyticsRepository,
    models::analytics::{AnalyticsOverview, DashboardOverview, Report, SalesPeriod},
};

#[derive(Clone)]
pub struct AnalyticsService {
    repo: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    pub async fn overview(&self) -> Result<AnalyticsOverview, AppError> {
        Ok(AnalyticsOverview {
            kpis: self.repo.kpis().await?,
            sales_trend: self.repo.monthly_sales().await?,
            category_distribution: self.repo.category_shares().await?,
            top_products: self.repo.top_products().await?,
        })
    }

    pub async fn dashboard(&self, period: SalesPeriod) -> Result<DashboardOverview, AppError> {
        Ok(DashboardOverview {
            stats: self.repo.stat_cards().await?,
            period,
            sales: self.repo.sales_chart(period).await?,
            category_sales: self.repo.category_sales().await?,
            recent_activity: self.repo.recent_activity().await?,
        })
    }

    pub async fn report(&self, title: &str) -> Result<Report, AppError> {
        self.repo
            .report(title)
            .await?
            .ok_or_else(|| AppError::not_found("Relatório", title))
    }
}
