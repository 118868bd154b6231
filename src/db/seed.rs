// src/db/seed.rs

// Dados iniciais (mock). Carregados quando SEED_MOCK_DATA=true.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{
    alerts::{Alert, AlertPriority, AlertType},
    inventory::{Category, InventoryItem, Unit},
    orders::{Order, OrderStatus, PaymentMethod},
    stores::{StoreData, StoreStatus, StoreType},
};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_then(|day| day.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

fn item(
    id: &str,
    name: &str,
    category: Category,
    quantity: u32,
    unit: Unit,
    price: i64,
    expiry_date: Option<NaiveDate>,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category,
        quantity,
        unit,
        price: Decimal::from(price),
        expiry_date,
    }
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        item("1", "Basmati Rice", Category::Groceries, 50, Unit::Kg, 120, None),
        item("2", "Wheat Flour", Category::Groceries, 5, Unit::Kg, 45, None),
        item("3", "Paracetamol 500mg", Category::Medicines, 100, Unit::Tablets, 2, date(2024, 12, 31)),
        item("4", "Fresh Tomatoes", Category::Vegetables, 0, Unit::Kg, 60, date(2024, 9, 25)),
        item("5", "Notebook A4", Category::Stationery, 25, Unit::Pieces, 50, None),
    ]
}

fn order(
    id: &str,
    customer_name: &str,
    item_count: u32,
    total: i64,
    status: OrderStatus,
    day: u32,
    payment_method: PaymentMethod,
) -> Order {
    Order {
        id: id.into(),
        customer_name: customer_name.into(),
        item_count,
        total: Decimal::from(total),
        status,
        date: date(2024, 8, day).unwrap_or_default(),
        payment_method,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        order("ORD-001", "Rajesh Kumar", 5, 850, OrderStatus::Completed, 19, PaymentMethod::Upi),
        order("ORD-002", "Priya Sharma", 3, 420, OrderStatus::Processing, 19, PaymentMethod::Cash),
        order("ORD-003", "Amit Singh", 8, 1250, OrderStatus::Pending, 18, PaymentMethod::Card),
        order("ORD-004", "Sunita Patel", 2, 180, OrderStatus::Cancelled, 18, PaymentMethod::Upi),
    ]
}

pub fn stores() -> Vec<StoreData> {
    vec![
        StoreData {
            id: "ST001".into(),
            name: "Downtown Grocery Hub".into(),
            address: "123 Main Street, Central Market".into(),
            city: "Mumbai".into(),
            phone: "+91 98765 43210".into(),
            email: "downtown@smartshelf.com".into(),
            manager: "Rajesh Kumar".into(),
            store_type: StoreType::Grocery,
            status: StoreStatus::Active,
            revenue: Decimal::from(125_000),
            orders: 450,
            inventory: 1200,
            rating: 4.8,
        },
        StoreData {
            id: "ST002".into(),
            name: "MediCare Plus Pharmacy".into(),
            address: "456 Health Avenue, Medical District".into(),
            city: "Delhi".into(),
            phone: "+91 98765 43211".into(),
            email: "medicare@smartshelf.com".into(),
            manager: "Dr. Priya Sharma".into(),
            store_type: StoreType::Medical,
            status: StoreStatus::Active,
            revenue: Decimal::from(89_000),
            orders: 320,
            inventory: 850,
            rating: 4.9,
        },
        StoreData {
            id: "ST003".into(),
            name: "Fresh Veggie Market".into(),
            address: "789 Green Street, Farmer's Market".into(),
            city: "Bangalore".into(),
            phone: "+91 98765 43212".into(),
            email: "freshveggie@smartshelf.com".into(),
            manager: "Amit Singh".into(),
            store_type: StoreType::Vegetables,
            status: StoreStatus::Maintenance,
            revenue: Decimal::from(45_000),
            orders: 180,
            inventory: 400,
            rating: 4.5,
        },
        StoreData {
            id: "ST004".into(),
            name: "Smart Stationery World".into(),
            address: "321 Education Lane, Student Quarter".into(),
            city: "Pune".into(),
            phone: "+91 98765 43213".into(),
            email: "stationery@smartshelf.com".into(),
            manager: "Sunita Patel".into(),
            store_type: StoreType::Stationery,
            status: StoreStatus::Active,
            revenue: Decimal::from(67_000),
            orders: 290,
            inventory: 950,
            rating: 4.6,
        },
    ]
}

fn alert(
    id: &str,
    title: &str,
    description: &str,
    alert_type: AlertType,
    priority: AlertPriority,
    timestamp: NaiveDateTime,
    is_read: bool,
    action_required: bool,
) -> Alert {
    Alert {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        alert_type,
        priority,
        timestamp,
        is_read,
        action_required,
    }
}

pub fn alerts() -> Vec<Alert> {
    vec![
        alert(
            "1",
            "Low Stock Alert",
            "Wheat Flour is running low (5 kg remaining)",
            AlertType::LowStock,
            AlertPriority::High,
            timestamp(2024, 8, 19, 10, 30),
            false,
            true,
        ),
        alert(
            "2",
            "Expiry Warning",
            "Paracetamol batch expires in 3 days",
            AlertType::Expiry,
            AlertPriority::Medium,
            timestamp(2024, 8, 19, 9, 15),
            false,
            true,
        ),
        alert(
            "3",
            "High Demand Detected",
            "Basmati Rice sales increased by 40% this week",
            AlertType::HighDemand,
            AlertPriority::Medium,
            timestamp(2024, 8, 19, 8, 0),
            true,
            false,
        ),
        alert(
            "4",
            "Predictive Restocking",
            "Tomatoes may run out in 2 days based on current trends",
            AlertType::Predictive,
            AlertPriority::Medium,
            timestamp(2024, 8, 18, 16, 45),
            false,
            true,
        ),
        alert(
            "5",
            "System Notification",
            "SmartShelf sensors updated successfully",
            AlertType::System,
            AlertPriority::Low,
            timestamp(2024, 8, 18, 12, 0),
            true,
            false,
        ),
    ]
}
