use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// One transactional unit of work per request.
///
/// `begin` opens a transaction, `commit` consumes it. Any other exit path
/// (an early `?` return, a panic) drops the inner `DatabaseTransaction`,
/// which rolls it back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    pub async fn rollback(self) -> Result<(), DbErr> {
        log::debug!("Rolling back unit of work");
        self.txn.rollback().await
    }
}
