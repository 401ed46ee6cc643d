//! # park-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AssignmentService, AuthService, ExportService, PaymentService, ResidentService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SlotService,
    StatsService, ViolationService,
};
