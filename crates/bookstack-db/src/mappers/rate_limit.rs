//! Rate limit model -> entity mapper

use bookstack_core::entities::RateLimit;

use crate::models::RateLimitModel;

impl From<RateLimitModel> for RateLimit {
    fn from(model: RateLimitModel) -> Self {
        RateLimit {
            id: model.id,
            tier_id: model.tier_id,
            name: model.name,
            path: model.path,
            limit: model.limit,
            period: model.period,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
