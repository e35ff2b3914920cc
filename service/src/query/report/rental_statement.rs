//! [`RentalStatement`] definition.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::rental::Term;
use crate::{
    accounting::{Quote, Reconciliation},
    domain::{payment, rental, AreaRental, Payment},
    infra::{database, Database},
    Query, Service,
};

/// [`Query`] to assemble the financial statement of an [`AreaRental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RentalStatement {
    /// ID of the [`AreaRental`] to assemble the statement of.
    pub rental_id: rental::Id,
}

/// Output of the [`RentalStatement`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`AreaRental`] the statement is assembled of.
    pub rental: AreaRental,

    /// [`Quote`] of the [`AreaRental`]'s fixed [`Term`], if it has one.
    pub quote: Option<Quote>,

    /// Netting of the [`quote`]d total against the registered [`Payment`]s.
    ///
    /// [`None`] for an open-ended [`Term`]: there's no total to net
    /// against.
    ///
    /// [`quote`]: Output::quote
    pub balance: Option<Reconciliation>,
}

impl<Db> Query<RentalStatement> for Service<Db>
where
    Db: Database<
            Select<By<Option<AreaRental>, rental::Id>>,
            Ok = Option<AreaRental>,
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
        RentalStatement { rental_id }: RentalStatement,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(rental) = self
            .database()
            .execute(Select(By::<Option<AreaRental>, _>::new(rental_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let payments = self
            .database()
            .execute(Select(By::<Vec<Payment>, _>::new(
                payment::Payee::Rental(rental_id),
            )))
            .await
            .map_err(tracerr::wrap!())?;

        let quote = Quote::calculate(rental.monthly_rate, &rental.term);
        let balance = quote.map(|q| {
            Reconciliation::calculate(
                q.total_amount,
                &payments,
                self.config().overpayment,
            )
        });

        Ok(Some(Output {
            rental,
            quote,
            balance,
        }))
    }
}
