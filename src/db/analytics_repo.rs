// src/db/analytics_repo.rs

// Indicadores fixos. Os números não vêm dos pedidos nem do estoque.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::analytics::{
        ActivityBadge, ActivityItem, ActivityType, CategoryShare, CategorySales, ChangeType,
        KpiCard, MonthlySales, Report, SalesPeriod, SalesPoint, StatCard, TopProduct, Trend,
    },
};

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn kpis(&self) -> Result<Vec<KpiCard>, AppError>;
    async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AppError>;
    async fn category_shares(&self) -> Result<Vec<CategoryShare>, AppError>;
    async fn top_products(&self) -> Result<Vec<TopProduct>, AppError>;
    async fn stat_cards(&self) -> Result<Vec<StatCard>, AppError>;
    async fn sales_chart(&self, period: SalesPeriod) -> Result<Vec<SalesPoint>, AppError>;
    async fn category_sales(&self) -> Result<Vec<CategorySales>, AppError>;
    async fn recent_activity(&self) -> Result<Vec<ActivityItem>, AppError>;
    /// Busca pelo título sem diferenciar maiúsculas ("total_revenue" também serve).
    async fn report(&self, title: &str) -> Result<Option<Report>, AppError>;
}

pub struct StaticAnalyticsRepository;

fn money(value: i64) -> Decimal {
    Decimal::from(value)
}

fn kpi(title: &str, value: &str, change: &str) -> KpiCard {
    KpiCard { title: title.into(), value: value.into(), change: change.into() }
}

fn point(name: &str, sales: i64, orders: u32) -> SalesPoint {
    SalesPoint { name: name.into(), sales: money(sales), orders }
}

fn stat(
    title: &str,
    value: &str,
    change: &str,
    change_type: ChangeType,
    description: &str,
    route: &str,
) -> StatCard {
    StatCard {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        change_type,
        description: Some(description.into()),
        route: route.into(),
    }
}

fn activity(
    id: &str,
    activity_type: ActivityType,
    title: &str,
    description: &str,
    time: &str,
    badge: (&str, &str),
) -> ActivityItem {
    ActivityItem {
        id: id.into(),
        activity_type,
        title: title.into(),
        description: description.into(),
        time: time.into(),
        badge: Some(ActivityBadge { text: badge.0.into(), variant: badge.1.into() }),
        route: activity_type.route().into(),
    }
}

const REPORTS: &[(&str, &[&str])] = &[
    (
        "Total Revenue",
        &[
            "Total Revenue: ₹45,231",
            "Change: +12.5% from last month",
            "Monthly revenue target: ₹50,000",
        ],
    ),
    (
        "Total Orders",
        &[
            "Total Orders: 1,234",
            "Change: +8.2% from last month",
            "Average order value: ₹367",
        ],
    ),
    (
        "Inventory Items",
        &[
            "Inventory Items: 856",
            "Change: -2.1% from last month",
            "Items running low: 12",
        ],
    ),
    (
        "Low Stock Alerts",
        &[
            "Low Stock Alerts: 12",
            "Change: +3 new alerts",
            "Requires immediate attention",
        ],
    ),
    (
        "Analytics",
        &[
            "Revenue Growth: +12.5% vs last month",
            "Order Volume: +8.2% (180 orders)",
            "Customer Satisfaction: 94% (+2% this week)",
            "Profit Margin: 28.3% (-1.2% vs target)",
        ],
    ),
];

fn normalize(title: &str) -> String {
    title
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[async_trait]
impl AnalyticsRepository for StaticAnalyticsRepository {
    async fn kpis(&self) -> Result<Vec<KpiCard>, AppError> {
        Ok(vec![
            kpi("Revenue Growth", "+12.5%", "vs last month"),
            kpi("Order Volume", "+8.2%", "180 orders"),
            kpi("Customer Satisfaction", "94%", "+2% this week"),
            kpi("Profit Margin", "28.3%", "-1.2% vs target"),
        ])
    }

    async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AppError> {
        let rows = [
            ("Jan", 45_000, 120),
            ("Feb", 52_000, 140),
            ("Mar", 48_000, 130),
            ("Apr", 61_000, 165),
            ("May", 55_000, 145),
            ("Jun", 67_000, 180),
        ];
        Ok(rows
            .into_iter()
            .map(|(month, sales, orders)| MonthlySales { month: month.into(), sales: money(sales), orders })
            .collect())
    }

    async fn category_shares(&self) -> Result<Vec<CategoryShare>, AppError> {
        let rows = [("Groceries", 40), ("Medicines", 25), ("Vegetables", 20), ("Stationery", 15)];
        Ok(rows
            .into_iter()
            .map(|(name, value)| CategoryShare { name: name.into(), value })
            .collect())
    }

    async fn top_products(&self) -> Result<Vec<TopProduct>, AppError> {
        let rows = [
            ("Basmati Rice", 150, 18_000, Trend::Up),
            ("Wheat Flour", 120, 5_400, Trend::Up),
            ("Paracetamol", 300, 600, Trend::Down),
            ("Notebooks", 80, 4_000, Trend::Up),
            ("Tomatoes", 200, 12_000, Trend::Down),
        ];
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, (name, sales, revenue, trend))| TopProduct {
                rank: index + 1,
                name: name.into(),
                sales,
                revenue: money(revenue),
                trend,
            })
            .collect())
    }

    async fn stat_cards(&self) -> Result<Vec<StatCard>, AppError> {
        Ok(vec![
            stat(
                "Total Revenue",
                "₹45,231",
                "+12.5% from last month",
                ChangeType::Positive,
                "Monthly revenue target: ₹50,000",
                "/analytics",
            ),
            stat(
                "Total Orders",
                "1,234",
                "+8.2% from last month",
                ChangeType::Positive,
                "Average order value: ₹367",
                "/orders",
            ),
            stat(
                "Inventory Items",
                "856",
                "-2.1% from last month",
                ChangeType::Negative,
                "Items running low: 12",
                "/inventory",
            ),
            stat(
                "Low Stock Alerts",
                "12",
                "+3 new alerts",
                ChangeType::Negative,
                "Requires immediate attention",
                "/alerts",
            ),
        ])
    }

    async fn sales_chart(&self, period: SalesPeriod) -> Result<Vec<SalesPoint>, AppError> {
        Ok(match period {
            SalesPeriod::Weekly => vec![
                point("Mon", 4_000, 24),
                point("Tue", 3_000, 18),
                point("Wed", 5_000, 32),
                point("Thu", 2_780, 17),
                point("Fri", 1_890, 12),
                point("Sat", 6_390, 41),
                point("Sun", 4_490, 28),
            ],
            SalesPeriod::Monthly => vec![
                point("Week 1", 25_000, 156),
                point("Week 2", 32_000, 198),
                point("Week 3", 28_000, 175),
                point("Week 4", 35_000, 220),
            ],
        })
    }

    async fn category_sales(&self) -> Result<Vec<CategorySales>, AppError> {
        let rows = [
            ("Groceries", 35, 15_000),
            ("Medicines", 25, 12_000),
            ("Vegetables", 20, 8_000),
            ("Stationery", 10, 4_000),
            ("Others", 10, 3_000),
        ];
        Ok(rows
            .into_iter()
            .map(|(name, value, sales)| CategorySales { name: name.into(), value, sales: money(sales) })
            .collect())
    }

    async fn recent_activity(&self) -> Result<Vec<ActivityItem>, AppError> {
        Ok(vec![
            activity(
                "1",
                ActivityType::Order,
                "New Order #ORD-1234",
                "Customer purchased 5 items worth ₹1,250",
                "2 minutes ago",
                ("Completed", "default"),
            ),
            activity(
                "2",
                ActivityType::Alert,
                "Low Stock Alert",
                "Rice (Basmati) - Only 5 kg remaining",
                "15 minutes ago",
                ("Critical", "destructive"),
            ),
            activity(
                "3",
                ActivityType::Inventory,
                "Stock Updated",
                "Added 50 units of Wheat Flour (10kg)",
                "1 hour ago",
                ("Updated", "secondary"),
            ),
            activity(
                "4",
                ActivityType::Order,
                "Bulk Order #ORD-1233",
                "Local restaurant ordered supplies worth ₹15,000",
                "2 hours ago",
                ("Processing", "outline"),
            ),
            activity(
                "5",
                ActivityType::Analytics,
                "Weekly Report Generated",
                "Sales increased by 12% compared to last week",
                "3 hours ago",
                ("Generated", "secondary"),
            ),
        ])
    }

    async fn report(&self, title: &str) -> Result<Option<Report>, AppError> {
        let wanted = normalize(title);
        Ok(REPORTS
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(name, lines)| Report {
                title: (*name).to_string(),
                body: lines.join("\n"),
            }))
    }
}
