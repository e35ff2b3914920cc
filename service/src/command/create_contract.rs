//! [`Command`] for creating a new [`Contract`].

use common::{
    operations::{Commit, Insert, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::contract::{Code, Terms, Title};
use crate::{
    domain::{contract, Contract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Contract`].
#[derive(Clone, Debug)]
pub struct CreateContract {
    /// [`Title`] of a new [`Contract`].
    pub title: contract::Title,

    /// Billing [`Terms`] of a new [`Contract`].
    pub terms: contract::Terms,
}

impl<Db> Command<CreateContract> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<Insert<Contract>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Contract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateContract { title, terms } = cmd;

        if terms.rate.amount <= Decimal::ZERO {
            return Err(tracerr::new!(E::NonPositiveRate(terms.rate)));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut attempts = self.config().codes.max_attempts;
        let contract = loop {
            let contract = Contract {
                id: contract::Id::new(),
                code: contract::Code::random(),
                title: title.clone(),
                terms,
                created_at: DateTime::now().coerce(),
                settled_at: None,
                completed_at: None,
            };

            match tx.execute(Insert(contract.clone())).await {
                Ok(_) => break contract,
                Err(e)
                    if e.as_ref()
                        .is_unique_violation(Some("contracts_code_key")) =>
                {
                    attempts = attempts.saturating_sub(1);
                    if attempts == 0 {
                        return Err(tracerr::new!(E::CodeGenerationExhausted));
                    }
                    log::debug!(
                        "`contract::Code` {} is occupied already, \
                         regenerating",
                        contract.code,
                    );
                }
                Err(e) => {
                    return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
                }
            }
        };
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(contract)
    }
}

/// Error of [`CreateContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Failed to generate a unique [`Code`] for a new [`Contract`].
    #[display("Failed to generate a unique `contract::Code`")]
    CodeGenerationExhausted,

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided [`Terms`] rate is not positive.
    #[display("`{_0}` rate is not positive")]
    NonPositiveRate(#[error(not(source))] Money),
}
