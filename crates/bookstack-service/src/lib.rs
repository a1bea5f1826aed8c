//! # bookstack-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, BookService, PostService, RateLimitService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TierService, UserService,
};
