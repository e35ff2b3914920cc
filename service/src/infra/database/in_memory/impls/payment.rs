//! [`Payment`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{payment, Payment},
    infra::{
        database::{self, in_memory::Store, InMemory},
        Database,
    },
};

impl<S> Database<Select<By<Vec<Payment>, payment::Payee>>> for InMemory<S>
where
    S: Store,
{
    type Ok = Vec<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Payment>, payment::Payee>>,
    ) -> Result<Self::Ok, Self::Err> {
        let payee = by.into_inner();
        Ok(self.with(|state| state.payments(payee)).await)
    }
}

impl<S> Database<Insert<Payment>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.insert_payment(payment))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}
