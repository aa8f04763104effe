//! `person_records` table: one row per identity key.
//!
//! The profession summary and both history sequences are stored as JSON
//! columns; the storage engine owns their (de)serialization.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "person_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub nexa_id: String,
    pub user_name: String,
    pub phone: String,
    pub email: String,
    pub profession_summary: Json,
    pub networking_goals: Json,
    pub meeting_history: Json,
    pub requested_to: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
