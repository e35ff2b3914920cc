//! [`Command`] for ending an [`AreaRental`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{rental, AreaRental},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for ending an [`AreaRental`].
///
/// Ending is orthogonal to settlement: an outstanding [`AreaRental`] may
/// well be ended, leaving its balance to be paid off afterwards.
#[derive(Clone, Copy, Debug)]
pub struct EndRental {
    /// ID of the [`AreaRental`] to be ended.
    pub rental_id: rental::Id,
}

impl<Db> Command<EndRental> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<AreaRental>, rental::Id>>,
            Ok = Option<AreaRental>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<AreaRental, rental::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<AreaRental>, rental::Id>>,
            Ok = Option<AreaRental>,
            Err = Traced<database::Error>,
        > + Database<Update<AreaRental>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = AreaRental;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: EndRental) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let EndRental { rental_id } = cmd;

        self.database()
            .execute(Select(By::<Option<AreaRental>, _>::new(rental_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RentalNotExists(rental_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent endings of the same `AreaRental`.
        tx.execute(Lock(By::new(rental_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut rental = tx
            .execute(Select(By::<Option<AreaRental>, _>::new(rental_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RentalNotExists(rental_id))
            .map_err(tracerr::wrap!())?;

        if rental.ended_at.is_some() {
            return Err(tracerr::new!(E::RentalAlreadyEnded(rental_id)));
        }

        _ = rental.ended_at.replace(DateTime::now().coerce());

        tx.execute(Update(rental.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(rental)
    }
}

/// Error of [`EndRental`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`AreaRental`] is already ended.
    #[display("`AreaRental(id: {_0})` is already ended")]
    RentalAlreadyEnded(#[error(not(source))] rental::Id),

    /// [`AreaRental`] with the provided ID does not exist.
    #[display("`AreaRental(id: {_0})` does not exist")]
    RentalNotExists(#[error(not(source))] rental::Id),
}
