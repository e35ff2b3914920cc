//! [`State`] definitions.

use std::collections::HashMap;

use itertools::Itertools as _;

use crate::{
    domain::{
        contract, payment, rental, work_log, AreaRental, Contract, Payment,
    },
    read::Journal,
};

use super::Error;

/// Whole data stored by the in-memory database.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Stored [`Contract`]s, keyed by their IDs.
    contracts: HashMap<contract::Id, Contract>,

    /// Stored [`AreaRental`]s, keyed by their IDs.
    rentals: HashMap<rental::Id, AreaRental>,

    /// Stored [`Payment`]s, in the order of registration.
    payments: Vec<Payment>,

    /// Logged [`work_log::Entry`]s, in the order of logging.
    work_log: Vec<work_log::Entry>,
}

impl State {
    /// Looks up a [`Contract`] by its ID.
    #[must_use]
    pub fn contract(&self, id: contract::Id) -> Option<&Contract> {
        self.contracts.get(&id)
    }

    /// Inserts the provided [`Contract`] as a new row.
    ///
    /// # Errors
    ///
    /// If the ID or the [`contract::Code`] of the provided [`Contract`] is
    /// occupied already.
    pub fn insert_contract(&mut self, contract: Contract) -> Result<(), Error> {
        if self.contracts.contains_key(&contract.id) {
            return Err(Error::UniqueViolation("contracts_pkey"));
        }
        if self.contracts.values().any(|c| c.code == contract.code) {
            return Err(Error::UniqueViolation("contracts_code_key"));
        }
        _ = self.contracts.insert(contract.id, contract);
        Ok(())
    }

    /// Overwrites the stored [`Contract`] having the same ID, or inserts it
    /// as a new row.
    ///
    /// # Errors
    ///
    /// If the [`contract::Code`] of the provided [`Contract`] is occupied by
    /// another row already.
    pub fn update_contract(&mut self, contract: Contract) -> Result<(), Error> {
        if self
            .contracts
            .values()
            .any(|c| c.code == contract.code && c.id != contract.id)
        {
            return Err(Error::UniqueViolation("contracts_code_key"));
        }
        _ = self.contracts.insert(contract.id, contract);
        Ok(())
    }

    /// Looks up an [`AreaRental`] by its ID.
    #[must_use]
    pub fn rental(&self, id: rental::Id) -> Option<&AreaRental> {
        self.rentals.get(&id)
    }

    /// Inserts the provided [`AreaRental`] as a new row.
    ///
    /// # Errors
    ///
    /// If the ID or the [`rental::Code`] of the provided [`AreaRental`] is
    /// occupied already.
    pub fn insert_rental(&mut self, rental: AreaRental) -> Result<(), Error> {
        if self.rentals.contains_key(&rental.id) {
            return Err(Error::UniqueViolation("area_rentals_pkey"));
        }
        if self.rentals.values().any(|r| r.code == rental.code) {
            return Err(Error::UniqueViolation("area_rentals_code_key"));
        }
        _ = self.rentals.insert(rental.id, rental);
        Ok(())
    }

    /// Overwrites the stored [`AreaRental`] having the same ID, or inserts it
    /// as a new row.
    ///
    /// # Errors
    ///
    /// If the [`rental::Code`] of the provided [`AreaRental`] is occupied by
    /// another row already.
    pub fn update_rental(&mut self, rental: AreaRental) -> Result<(), Error> {
        if self
            .rentals
            .values()
            .any(|r| r.code == rental.code && r.id != rental.id)
        {
            return Err(Error::UniqueViolation("area_rentals_code_key"));
        }
        _ = self.rentals.insert(rental.id, rental);
        Ok(())
    }

    /// Inserts the provided [`Payment`] as a new row.
    ///
    /// # Errors
    ///
    /// If the ID or the [`payment::Code`] of the provided [`Payment`] is
    /// occupied already.
    pub fn insert_payment(&mut self, payment: Payment) -> Result<(), Error> {
        if self.payments.iter().any(|p| p.id == payment.id) {
            return Err(Error::UniqueViolation("payments_pkey"));
        }
        if self.payments.iter().any(|p| p.code == payment.code) {
            return Err(Error::UniqueViolation("payments_code_key"));
        }
        self.payments.push(payment);
        Ok(())
    }

    /// Returns all the [`Payment`]s registered against the specified
    /// [`payment::Payee`], in the order of registration.
    #[must_use]
    pub fn payments(&self, payee: payment::Payee) -> Vec<Payment> {
        self.payments.iter().filter(|p| p.payee == payee).cloned().collect()
    }

    /// Inserts the provided [`work_log::Entry`] as a new row.
    ///
    /// # Errors
    ///
    /// If the ID of the provided [`work_log::Entry`] is occupied already, or
    /// another [`work_log::Entry`] exists for the same [`Contract`], employee
    /// and [`work_log::WorkDate`] combination.
    pub fn insert_work_log_entry(
        &mut self,
        entry: work_log::Entry,
    ) -> Result<(), Error> {
        if self.work_log.iter().any(|e| e.id == entry.id) {
            return Err(Error::UniqueViolation("work_log_pkey"));
        }
        if self.work_log.iter().any(|e| {
            e.contract_id == entry.contract_id
                && e.employee_id == entry.employee_id
                && e.date == entry.date
        }) {
            return Err(Error::UniqueViolation(
                "work_log_contract_employee_date_key",
            ));
        }
        self.work_log.push(entry);
        Ok(())
    }

    /// Returns the [`Journal`] of the specified [`Contract`].
    #[must_use]
    pub fn journal(&self, contract_id: contract::Id) -> Journal {
        Journal(
            self.work_log
                .iter()
                .filter(|e| e.contract_id == contract_id)
                .copied()
                .sorted_by_key(|e| (e.date, e.created_at))
                .collect(),
        )
    }
}
