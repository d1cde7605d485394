//! SeaORM entities for organizations.

pub use custom_domain::Entity as CustomDomainEntity;
pub use network::Entity as NetworkEntity;
pub use organization::Entity as OrganizationEntity;

/// Organization entity module.
pub mod organization {
    use chrono::{DateTime, Utc};
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "organization")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub name: String,
        pub csv_charset: String,
        #[sea_orm(column_type = "Text")]
        pub sso_cert: String,
        pub sso_entrypoint: String,
        pub sso_issuer: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::custom_domain::Entity")]
        CustomDomains,
        #[sea_orm(has_many = "super::network::Entity")]
        Networks,
    }

    impl Related<super::custom_domain::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CustomDomains.def()
        }
    }

    impl Related<super::network::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Networks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Custom domain entity module.
///
/// The domain itself is the primary key: one row, one owner.
pub mod custom_domain {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "organization_custom_domain")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub domain: String,
        pub organization_id: Uuid,
        /// Keeps the configured order of an organization's domains.
        pub position: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::organization::Entity",
            from = "Column::OrganizationId",
            to = "super::organization::Column::Id"
        )]
        Organization,
    }

    impl Related<super::organization::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Organization.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Network membership entity module.
pub mod network {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "organization_network")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub organization_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub network_id: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::organization::Entity",
            from = "Column::OrganizationId",
            to = "super::organization::Column::Id"
        )]
        Organization,
    }

    impl Related<super::organization::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Organization.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
