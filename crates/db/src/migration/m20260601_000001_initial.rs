//! Initial database migration.
//!
//! Creates the client master, the posted ledger and the document store.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(CLIENTS_SQL).await?;
        db.execute_unprepared(GL_ENTRIES_SQL).await?;
        db.execute_unprepared(DOCUMENTS_SQL).await?;
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const CLIENTS_SQL: &str = r"
CREATE TABLE clients (
    id              TEXT PRIMARY KEY,
    name            TEXT NOT NULL,
    workflow_month  VARCHAR(7) CHECK (workflow_month ~ '^\d{4}-\d{2}$'),
    is_locked       BOOLEAN NOT NULL DEFAULT false,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

// Amounts are NUMERIC(18,2): satang precision, no floats.
const GL_ENTRIES_SQL: &str = r"
CREATE TABLE gl_entries (
    id              UUID PRIMARY KEY,
    client_id       TEXT NOT NULL REFERENCES clients(id),
    date            DATE NOT NULL,
    doc_no          TEXT NOT NULL,
    description     TEXT NOT NULL DEFAULT '',
    account_code    VARCHAR(5) NOT NULL,
    account_name    TEXT NOT NULL DEFAULT '',
    debit           NUMERIC(18, 2) NOT NULL DEFAULT 0 CHECK (debit >= 0),
    credit          NUMERIC(18, 2) NOT NULL DEFAULT 0 CHECK (credit >= 0),
    period          VARCHAR(7),
    department_code TEXT,
    source_doc_id   TEXT,
    created_by      TEXT NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT chk_gl_entries_one_side CHECK ((debit > 0) <> (credit > 0))
);

CREATE INDEX idx_gl_entries_client ON gl_entries(client_id);
CREATE INDEX idx_gl_entries_client_doc_no ON gl_entries(client_id, doc_no);
";

const DOCUMENTS_SQL: &str = r"
CREATE TABLE documents (
    id              TEXT PRIMARY KEY,
    client_id       TEXT NOT NULL REFERENCES clients(id),
    ai_data         JSONB,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_documents_client ON documents(client_id);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION update_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = NOW();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_clients_updated_at
    BEFORE UPDATE ON clients
    FOR EACH ROW EXECUTE FUNCTION update_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS documents CASCADE;
DROP TABLE IF EXISTS gl_entries CASCADE;
DROP TABLE IF EXISTS clients CASCADE;
DROP FUNCTION IF EXISTS update_updated_at() CASCADE;
";
