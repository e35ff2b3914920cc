//! Work log [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{contract, work_log},
    infra::{
        database::{self, in_memory::Store, InMemory},
        Database,
    },
    read::Journal,
};

impl<S> Database<Select<By<Journal, contract::Id>>> for InMemory<S>
where
    S: Store,
{
    type Ok = Journal;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Journal, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let contract_id = by.into_inner();
        Ok(self.with(|state| state.journal(contract_id)).await)
    }
}

impl<S> Database<Insert<work_log::Entry>> for InMemory<S>
where
    S: Store,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<work_log::Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        self.with_mut(|state| state.insert_work_log_entry(entry))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}
