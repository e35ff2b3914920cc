//! [`AreaRental`]-related [`Database`] implementations.

use common::operations::{By, Insert, Lock, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{rental, AreaRental},
    infra::{
        database::{self, in_memory::Store, InMemory},
        Database,
    },
};

impl<S> Database<Select<By<Option<AreaRental>, rental::Id>>> for InMemory<S>
where
    S: Store,
{
    type Ok = Option<AreaRental>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<AreaRental>, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.with(|state| state.rental(id).cloned()).await)
    }
}

impl<S> Database<Insert<AreaRental>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(rental): Insert<AreaRental>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.insert_rental(rental))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<S> Database<Update<AreaRental>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(rental): Update<AreaRental>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.update_rental(rental))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<S> Database<Lock<By<AreaRental, rental::Id>>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<AreaRental, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // A `Tx` client holds the whole `State` exclusively, so single rows
        // need no locking on top.
        Ok(())
    }
}
