//! [`Command`] for logging worked hours under a [`Contract`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::work_log::{Entry, Hours, WorkDate};
use crate::{
    domain::{contract, employee, work_log, Contract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for logging worked [`Hours`] under a [`Contract`].
#[derive(Clone, Copy, Debug)]
pub struct LogWorkHours {
    /// ID of the [`Contract`] to bill the [`Hours`] under.
    pub contract_id: contract::Id,

    /// ID of the employee who worked the [`Hours`].
    pub employee_id: employee::Id,

    /// [`WorkDate`] the [`Hours`] were worked on.
    pub date: work_log::WorkDate,

    /// Amount of worked [`Hours`].
    pub hours: work_log::Hours,
}

impl<Db> Command<LogWorkHours> for Service<Db>
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
        > + Database<Insert<work_log::Entry>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = work_log::Entry;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: LogWorkHours) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let LogWorkHours {
            contract_id,
            employee_id,
            date,
            hours,
        } = cmd;

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

        // Avoid concurrent actions upon the same `Contract`.
        tx.execute(Lock(By::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let contract = tx
            .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;
        if !contract.is_active() {
            return Err(tracerr::new!(E::ContractNotActive(contract_id)));
        }

        let entry = work_log::Entry {
            id: work_log::Id::new(),
            contract_id,
            employee_id,
            date,
            hours,
            created_at: DateTime::now().coerce(),
        };

        match tx.execute(Insert(entry)).await {
            Ok(_) => {}
            Err(e)
                if e.as_ref().is_unique_violation(Some(
                    "work_log_contract_employee_date_key",
                )) =>
            {
                return Err(tracerr::new!(E::AlreadyLogged(
                    contract_id,
                    employee_id,
                    date,
                )));
            }
            Err(e) => {
                return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
            }
        }

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(entry)
    }
}

/// Error of [`LogWorkHours`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Entry`] for the provided [`Contract`], employee and [`WorkDate`]
    /// exists already.
    #[display(
        "`Entry` for `Contract(id: {_0})`, `Employee(id: {_1})` and date \
         {_2} exists already"
    )]
    AlreadyLogged(contract::Id, employee::Id, work_log::WorkDate),

    /// [`Contract`] with the provided ID is completed already.
    #[display("`Contract(id: {_0})` is not active")]
    ContractNotActive(#[error(not(source))] contract::Id),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
