//! Tier model -> entity mapper

use bookstack_core::entities::Tier;

use crate::models::TierModel;

impl From<TierModel> for Tier {
    fn from(model: TierModel) -> Self {
        Tier {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
