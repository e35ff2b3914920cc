//! [`Contract`]-related [`Database`] implementations.

use common::operations::{By, Insert, Lock, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{contract, Contract},
    infra::{
        database::{self, in_memory::Store, InMemory},
        Database,
    },
};

impl<S> Database<Select<By<Option<Contract>, contract::Id>>> for InMemory<S>
where
    S: Store,
{
    type Ok = Option<Contract>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Contract>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.with(|state| state.contract(id).cloned()).await)
    }
}

impl<S> Database<Insert<Contract>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(contract): Insert<Contract>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.insert_contract(contract))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<S> Database<Update<Contract>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(contract): Update<Contract>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.update_contract(contract))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<S> Database<Lock<By<Contract, contract::Id>>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Contract, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // A `Tx` client holds the whole `State` exclusively, so single rows
        // need no locking on top.
        Ok(())
    }
}
