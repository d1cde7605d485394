//! Initial migration for the organization tables.

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Binary collation keeps MySQL lookups exact and case-sensitive.
const MYSQL_BINARY_COLLATION: &str = "COLLATE utf8mb4_bin";

/// Non-null string column compared byte for byte on every backend.
fn exact_match_string<T: IntoIden>(column: T, backend: DatabaseBackend) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    def.string().not_null();
    if backend == DatabaseBackend::MySql {
        def.extra(MYSQL_BINARY_COLLATION);
    }
    def
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        let mut name = exact_match_string(Organization::Name, backend);
        name.unique_key();
        let mut domain = exact_match_string(OrganizationCustomDomain::Domain, backend);
        domain.primary_key();

        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organization::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(name)
                    .col(
                        ColumnDef::new(Organization::CsvCharset)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Organization::SsoCert)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Organization::SsoEntrypoint)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Organization::SsoIssuer)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Organization::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organization::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key on `domain` is what keeps a domain from being
        // claimed by two organizations.
        manager
            .create_table(
                Table::create()
                    .table(OrganizationCustomDomain::Table)
                    .if_not_exists()
                    .col(domain)
                    .col(
                        ColumnDef::new(OrganizationCustomDomain::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationCustomDomain::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_custom_domain_organization")
                            .from(
                                OrganizationCustomDomain::Table,
                                OrganizationCustomDomain::OrganizationId,
                            )
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organization_custom_domain_organization")
                    .table(OrganizationCustomDomain::Table)
                    .col(OrganizationCustomDomain::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrganizationNetwork::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganizationNetwork::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationNetwork::NetworkId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OrganizationNetwork::OrganizationId)
                            .col(OrganizationNetwork::NetworkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_network_organization")
                            .from(
                                OrganizationNetwork::Table,
                                OrganizationNetwork::OrganizationId,
                            )
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganizationNetwork::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(OrganizationCustomDomain::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Organization::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Organization {
    Table,
    Id,
    Name,
    CsvCharset,
    SsoCert,
    SsoEntrypoint,
    SsoIssuer,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum OrganizationCustomDomain {
    Table,
    OrganizationId,
    Domain,
    Position,
}

#[derive(Iden)]
enum OrganizationNetwork {
    Table,
    OrganizationId,
    NetworkId,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn name_table(backend: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(Organization::Table)
            .col(exact_match_string(Organization::Name, backend))
            .to_owned()
    }

    #[test]
    fn mysql_string_keys_use_binary_collation() {
        let sql = name_table(DatabaseBackend::MySql).to_string(MysqlQueryBuilder);
        assert!(sql.contains(MYSQL_BINARY_COLLATION));
    }

    #[test]
    fn other_backends_keep_default_collation() {
        let sqlite = name_table(DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        let postgres = name_table(DatabaseBackend::Postgres).to_string(PostgresQueryBuilder);
        assert!(!sqlite.contains("COLLATE"));
        assert!(!postgres.contains("COLLATE"));
    }
}
