//! [`Command`] for recording a [`Payment`] against a [`Contract`].

use common::{
    money::Currency,
    operations::{
        By, Commit, Insert, Lock, Select, Transact, Transacted, Update,
    },
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::payment::{Code, Status};
use crate::{
    accounting::{Accrual, OverpaymentPolicy, Reconciliation},
    domain::{contract, payment, Contract, Payment},
    infra::{database, Database},
    read::Journal,
    Service,
};

use super::Command;

/// [`Command`] for recording a [`Payment`] against a [`Contract`].
#[derive(Clone, Copy, Debug)]
pub struct RecordContractPayment {
    /// ID of the [`Contract`] to register the [`Payment`] against.
    pub contract_id: contract::Id,

    /// Amount of the [`Payment`].
    pub amount: Money,

    /// [`Status`] of the [`Payment`].
    pub status: payment::Status,

    /// Date the [`Payment`] applies to.
    pub paid_on: payment::PaidOnDate,
}

impl<Db> Command<RecordContractPayment> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<Contract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Journal, contract::Id>>,
            Ok = Journal,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Payment>, payment::Payee>>,
            Ok = Vec<Payment>,
            Err = Traced<database::Error>,
        > + Database<Insert<Payment>, Err = Traced<database::Error>>
        + Database<Update<Contract>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RecordContractPayment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecordContractPayment {
            contract_id,
            amount,
            status,
            paid_on,
        } = cmd;

        if amount.amount <= Decimal::ZERO {
            return Err(tracerr::new!(E::NonPositiveAmount(amount)));
        }

        self.database()
            .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent payments upon the same `Contract`: two of them
        // reading the same remaining balance could both pass the guard.
        tx.execute(Lock(By::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut contract = tx
            .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;

        if amount.currency != contract.terms.rate.currency {
            return Err(tracerr::new!(E::CurrencyMismatch(
                amount.currency,
                contract.terms.rate.currency,
            )));
        }

        let journal = tx
            .execute(Select(By::<Journal, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let mut payments = tx
            .execute(Select(By::<Vec<Payment>, _>::new(
                payment::Payee::Contract(contract_id),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let earned = Accrual::calculate(&contract.terms, &journal).total_earned;
        let before = Reconciliation::calculate(
            earned,
            &payments,
            OverpaymentPolicy::Signed,
        );
        if amount.amount > before.remaining.amount {
            return Err(tracerr::new!(E::ExceedsRemaining(
                amount,
                before.remaining,
            )));
        }

        let mut attempts = self.config().codes.max_attempts;
        let payment = loop {
            let payment = Payment {
                id: payment::Id::new(),
                code: payment::Code::random(),
                payee: payment::Payee::Contract(contract_id),
                amount,
                status,
                paid_on,
                created_at: DateTime::now().coerce(),
            };

            match tx.execute(Insert(payment.clone())).await {
                Ok(_) => break payment,
                Err(e)
                    if e.as_ref()
                        .is_unique_violation(Some("payments_code_key")) =>
                {
                    attempts = attempts.saturating_sub(1);
                    if attempts == 0 {
                        return Err(tracerr::new!(E::CodeGenerationExhausted));
                    }
                    log::debug!(
                        "`payment::Code` {} is occupied already, \
                         regenerating",
                        payment.code,
                    );
                }
                Err(e) => {
                    return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
                }
            }
        };

        payments.push(payment.clone());
        let after = Reconciliation::calculate(
            earned,
            &payments,
            OverpaymentPolicy::Signed,
        );
        if contract.settled_at.is_none() && after.is_fully_paid {
            _ = contract.settled_at.replace(DateTime::now().coerce());
            tx.execute(Update(contract.clone()))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
            log::info!(
                "`Contract(id: {contract_id})` is settled in full by \
                 `Payment` {}",
                payment.code,
            );
        }

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(payment)
    }
}

/// Error of [`RecordContractPayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Failed to generate a unique [`Code`] for a new [`Payment`].
    #[display("Failed to generate a unique `payment::Code`")]
    CodeGenerationExhausted,

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// Provided amount is expressed in a different [`Currency`] than the
    /// [`Contract`] is billed in.
    #[display("`{_0}` payment cannot settle a `{_1}` balance")]
    CurrencyMismatch(Currency, Currency),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided amount exceeds the remaining balance of the [`Contract`].
    #[display("`{_0}` payment exceeds the remaining `{_1}` balance")]
    ExceedsRemaining(Money, Money),

    /// Provided amount is not positive.
    #[display("`{_0}` payment is not positive")]
    NonPositiveAmount(#[error(not(source))] Money),
}
