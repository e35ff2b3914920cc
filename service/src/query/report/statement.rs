//! [`Statement`] definition.

use common::{
    operations::{By, Select},
    Percent,
};
use tracerr::Traced;

use crate::{
    accounting::{self, Accrual, Reconciliation},
    domain::{contract, payment, Contract, Payment},
    infra::{database, Database},
    read::Journal,
    Query, Service,
};

/// [`Query`] to assemble the financial statement of a [`Contract`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Statement {
    /// ID of the [`Contract`] to assemble the statement of.
    pub contract_id: contract::Id,
}

/// Output of the [`Statement`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Contract`] the statement is assembled of.
    pub contract: Contract,

    /// [`Accrual`] of the [`Contract`]'s work log under its current terms.
    pub accrual: Accrual,

    /// Completion progress of the [`Contract`].
    pub progress: Percent,

    /// Netting of the accrued earnings against the registered [`Payment`]s.
    pub balance: Reconciliation,
}

impl<Db> Query<Statement> for Service<Db>
where
    Db: Database<
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
        >,
{
    type Ok = Option<Output>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Statement { contract_id }: Statement,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(contract) = self
            .database()
            .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let journal = self
            .database()
            .execute(Select(By::<Journal, _>::new(contract_id)))
            .await
            .map_err(tracerr::wrap!())?;
        let payments = self
            .database()
            .execute(Select(By::<Vec<Payment>, _>::new(
                payment::Payee::Contract(contract_id),
            )))
            .await
            .map_err(tracerr::wrap!())?;

        let accrual = Accrual::calculate(&contract.terms, &journal);
        let progress = accounting::progress::completion(
            &contract.terms,
            accrual.total_hours,
        );
        let balance = Reconciliation::calculate(
            accrual.total_earned,
            &payments,
            self.config().overpayment,
        );

        Ok(Some(Output {
            contract,
            accrual,
            progress,
            balance,
        }))
    }
}
