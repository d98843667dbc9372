//! Records seeded into a fresh store.

use crate::domain::customer::{OwnedVehicle, ServiceVisit};
use crate::domain::part::{PartDetails, PartUsage};
use crate::domain::service_ticket::{Operation, ServiceDetails};
use crate::domain::vehicle::VehicleDetails;
use crate::domain::{ContactInfo, Customer, NewUser, Part, ServiceStatus, ServiceTicket, Vehicle};

fn contact(phone: &str, email: &str) -> ContactInfo {
    ContactInfo {
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

pub fn users() -> Vec<NewUser> {
    vec![
        NewUser::new("Ahmet Yılmaz", "ahmet@example.com"),
        NewUser::new("Ayşe Demir", "ayse@example.com"),
        NewUser::new("Mehmet Kaya", "mehmet@example.com"),
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "Ahmet Yılmaz".to_string(),
            phone: "0555 123 45 67".to_string(),
            email: "ahmet@mail.com".to_string(),
            vehicle_count: 1,
            last_service_date: "15.01.2024".to_string(),
            total_spent: 2500,
            vehicles: vec![OwnedVehicle {
                plate: "34 ABC 123".to_string(),
                model: "Ford Focus".to_string(),
                last_service: "15.01.2024".to_string(),
                status: ServiceStatus::Completed,
            }],
            service_history: vec![ServiceVisit {
                date: "15.01.2024".to_string(),
                plate: "34 ABC 123".to_string(),
                services: "Yağ Değişimi, Fren Kontrolü".to_string(),
                cost: 2500,
            }],
        },
        Customer {
            id: "2".to_string(),
            name: "Mehmet Demir".to_string(),
            phone: "0532 987 65 43".to_string(),
            email: "mehmet@mail.com".to_string(),
            vehicle_count: 2,
            last_service_date: "20.01.2024".to_string(),
            total_spent: 3700,
            vehicles: vec![
                OwnedVehicle {
                    plate: "34 DEF 456".to_string(),
                    model: "Toyota Corolla".to_string(),
                    last_service: "20.01.2024".to_string(),
                    status: ServiceStatus::Waiting,
                },
                OwnedVehicle {
                    plate: "34 GHI 789".to_string(),
                    model: "Honda Civic".to_string(),
                    last_service: "15.12.2023".to_string(),
                    status: ServiceStatus::Completed,
                },
            ],
            service_history: vec![
                ServiceVisit {
                    date: "20.01.2024".to_string(),
                    plate: "34 DEF 456".to_string(),
                    services: "Balata Değişimi".to_string(),
                    cost: 1200,
                },
                ServiceVisit {
                    date: "15.12.2023".to_string(),
                    plate: "34 GHI 789".to_string(),
                    services: "Genel Bakım".to_string(),
                    cost: 2500,
                },
            ],
        },
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".to_string(),
            plate: "34 ABC 123".to_string(),
            customer_name: "Ahmet Yılmaz".to_string(),
            model: "Ford Focus".to_string(),
            last_service: "15.01.2024".to_string(),
            status: ServiceStatus::Completed,
            details: VehicleDetails {
                motor_no: "ABC123456".to_string(),
                chassis_no: "XYZ789012".to_string(),
                mileage: 75_000,
                customer: contact("0532 123 45 67", "ahmet@email.com"),
            },
        },
        Vehicle {
            id: "2".to_string(),
            plate: "06 XYZ 456".to_string(),
            customer_name: "Mehmet Demir".to_string(),
            model: "Toyota Corolla".to_string(),
            last_service: "20.01.2024".to_string(),
            status: ServiceStatus::Waiting,
            details: VehicleDetails {
                motor_no: "DEF456789".to_string(),
                chassis_no: "KLM345678".to_string(),
                mileage: 120_000,
                customer: contact("0533 234 56 78", "mehmet@email.com"),
            },
        },
        Vehicle {
            id: "3".to_string(),
            plate: "35 DEF 789".to_string(),
            customer_name: "Ayşe Kaya".to_string(),
            model: "Hyundai i20".to_string(),
            last_service: "23.01.2024".to_string(),
            status: ServiceStatus::InProgress,
            details: VehicleDetails {
                motor_no: "GHI789012".to_string(),
                chassis_no: "NOP901234".to_string(),
                mileage: 45_000,
                customer: contact("0535 345 67 89", "ayse@email.com"),
            },
        },
    ]
}

fn operation(date: &str, name: &str, technician: &str, cost: u64) -> Operation {
    Operation {
        date: date.to_string(),
        operation: name.to_string(),
        technician: technician.to_string(),
        cost,
    }
}

pub fn services() -> Vec<ServiceTicket> {
    vec![
        ServiceTicket {
            id: "1".to_string(),
            plate: "34 ABC 123".to_string(),
            customer_name: "Ahmet Yılmaz".to_string(),
            model: "Ford Focus".to_string(),
            complaint: "Motor çalışırken ses geliyor".to_string(),
            status: ServiceStatus::InProgress,
            date: "01.02.2025".to_string(),
            details: ServiceDetails {
                customer: contact("0532 123 45 67", "ahmet@email.com"),
                operations: vec![
                    operation("01.02.2025", "Motor Yağı Değişimi", "Ali Usta", 750),
                    operation("01.02.2025", "Fren Kontrolü", "Mehmet Usta", 500),
                ],
                total_cost: 1250,
            },
        },
        ServiceTicket {
            id: "2".to_string(),
            plate: "06 XYZ 456".to_string(),
            customer_name: "Mehmet Demir".to_string(),
            model: "Toyota Corolla".to_string(),
            complaint: "Fren pedalı sert, frenleme zayıf".to_string(),
            status: ServiceStatus::Waiting,
            date: "30.01.2025".to_string(),
            details: ServiceDetails {
                customer: contact("0533 234 56 78", "mehmet@email.com"),
                operations: Vec::new(),
                total_cost: 0,
            },
        },
        ServiceTicket {
            id: "3".to_string(),
            plate: "35 DEF 789".to_string(),
            customer_name: "Ayşe Kaya".to_string(),
            model: "Hyundai i20".to_string(),
            complaint: "Periyodik bakım ve yağ değişimi".to_string(),
            status: ServiceStatus::Completed,
            date: "28.01.2025".to_string(),
            details: ServiceDetails {
                customer: contact("0535 345 67 89", "ayse@email.com"),
                operations: vec![
                    operation("28.01.2025", "Periyodik Bakım", "Ali Usta", 1500),
                    operation("28.01.2025", "Yağ Değişimi", "Ali Usta", 750),
                ],
                total_cost: 2250,
            },
        },
    ]
}

fn usage(date: &str, plate: &str, customer: &str, quantity: u32) -> PartUsage {
    PartUsage {
        date: date.to_string(),
        plate: plate.to_string(),
        customer: customer.to_string(),
        quantity,
    }
}

pub fn parts() -> Vec<Part> {
    vec![
        Part {
            id: "1".to_string(),
            name: "Yağ Filtresi".to_string(),
            category: "Motor".to_string(),
            stock: 3,
            price: 250,
            expiry_date: "01.02.2025".to_string(),
            is_critical: true,
            details: PartDetails {
                code: "YF-123".to_string(),
                min_stock: 5,
                history: vec![
                    usage("01.02.2024", "34 ABC 123", "Ahmet Yılmaz", 1),
                    usage("15.01.2024", "06 XYZ 456", "Mehmet Demir", 2),
                ],
            },
        },
        Part {
            id: "2".to_string(),
            name: "Fren Balatası".to_string(),
            category: "Fren".to_string(),
            stock: 10,
            price: 500,
            expiry_date: "15.01.2025".to_string(),
            is_critical: false,
            details: PartDetails {
                code: "FB-456".to_string(),
                min_stock: 8,
                history: vec![usage("20.01.2024", "35 DEF 789", "Ayşe Kaya", 2)],
            },
        },
        Part {
            id: "3".to_string(),
            name: "Buji Takımı".to_string(),
            category: "Ateşleme".to_string(),
            stock: 5,
            price: 150,
            expiry_date: "20.01.2025".to_string(),
            is_critical: true,
            details: PartDetails {
                code: "BT-789".to_string(),
                min_stock: 6,
                history: Vec::new(),
            },
        },
    ]
}
