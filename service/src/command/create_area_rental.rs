//! [`Command`] for creating a new [`AreaRental`].

use common::{
    operations::{Commit, Insert, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::rental::{Area, Code, Term};
use crate::{
    domain::{rental, AreaRental},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`AreaRental`].
#[derive(Clone, Debug)]
pub struct CreateAreaRental {
    /// [`Area`] to be rented.
    pub area: rental::Area,

    /// Rate billed per occupied month.
    pub monthly_rate: Money,

    /// Deposit paid at the beginning of the occupation, if any.
    pub deposit: Option<Money>,

    /// Occupation [`Term`] of a new [`AreaRental`].
    pub term: rental::Term,
}

impl<Db> Command<CreateAreaRental> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<Insert<AreaRental>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = AreaRental;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateAreaRental,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateAreaRental {
            area,
            monthly_rate,
            deposit,
            term,
        } = cmd;

        if monthly_rate.amount <= Decimal::ZERO {
            return Err(tracerr::new!(E::NonPositiveRate(monthly_rate)));
        }
        if let Some(deposit) = deposit {
            if deposit.amount < Decimal::ZERO {
                return Err(tracerr::new!(E::NegativeDeposit(deposit)));
            }
        }
        if let Some(ends_on) = term.ends_on {
            if ends_on <= term.starts_on.coerce() {
                return Err(tracerr::new!(E::InvalidTerm(term)));
            }
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut attempts = self.config().codes.max_attempts;
        let rental = loop {
            let rental = AreaRental {
                id: rental::Id::new(),
                code: rental::Code::random(),
                area: area.clone(),
                monthly_rate,
                deposit,
                term,
                created_at: DateTime::now().coerce(),
                settled_at: None,
                ended_at: None,
            };

            match tx.execute(Insert(rental.clone())).await {
                Ok(_) => break rental,
                Err(e)
                    if e.as_ref()
                        .is_unique_violation(Some("area_rentals_code_key")) =>
                {
                    attempts = attempts.saturating_sub(1);
                    if attempts == 0 {
                        return Err(tracerr::new!(E::CodeGenerationExhausted));
                    }
                    log::debug!(
                        "`rental::Code` {} is occupied already, regenerating",
                        rental.code,
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

        Ok(rental)
    }
}

/// Error of [`CreateAreaRental`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Failed to generate a unique [`Code`] for a new [`AreaRental`].
    #[display("Failed to generate a unique `rental::Code`")]
    CodeGenerationExhausted,

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided [`Term`] doesn't end strictly after it starts.
    #[display("Invalid `Term`: {_0:?}")]
    InvalidTerm(#[error(not(source))] rental::Term),

    /// Provided deposit is negative.
    #[display("`{_0}` deposit is negative")]
    NegativeDeposit(#[error(not(source))] Money),

    /// Provided monthly rate is not positive.
    #[display("`{_0}` monthly rate is not positive")]
    NonPositiveRate(#[error(not(source))] Money),
}
