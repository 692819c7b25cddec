#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Booking;
use crate::domain::models::BookingRequest;
use crate::domain::models::BookingStatus;
use crate::domain::models::Payment;
use crate::domain::models::PaymentRequest;
use crate::domain::models::PaymentStatus;
use crate::domain::models::Seat;
use crate::domain::models::Session;
use crate::infrastructure::gateway::GatewayClient;

/// Local seat selection for one showtime. Nothing is reserved until submit;
/// another session can take a seat while the user deliberates.
#[derive(Default)]
pub struct SeatPlan {
    seats: Vec<Seat>,
    selected: Vec<String>,
}

impl SeatPlan {
    pub fn new(seats: Vec<Seat>) -> SeatPlan {
        return SeatPlan {
            seats,
            selected: vec![],
        };
    }

    pub fn seats(&self) -> &[Seat] {
        return &self.seats;
    }

    /// Selected seat numbers in the order they were picked.
    pub fn selected(&self) -> &[String] {
        return &self.selected;
    }

    /// Toggles a seat by number. Returns false for unknown seats and for
    /// anything that is not available.
    pub fn toggle(&mut self, seat_number: &str) -> bool {
        let Some(seat) = self
            .seats
            .iter()
            .find(|seat| return seat.seat_number == seat_number)
        else {
            return false;
        };
        if !seat.status.is_selectable() {
            return false;
        }

        if let Some(idx) = self.selected.iter().position(|s| return s == seat_number) {
            self.selected.remove(idx);
        } else {
            self.selected.push(seat_number.to_string());
        }

        return true;
    }

    pub fn movie_id(&self) -> Option<String> {
        return self.seats.iter().find_map(|seat| return seat.movie_id.clone());
    }

    /// Selected count times the unit price, where the unit price is the
    /// seat's own price or the configured ticket price when the seat data
    /// carries none. A seat priced at zero costs zero.
    pub fn total(&self) -> f64 {
        let fallback = Config::get(ConfigKey::TicketPrice)
            .parse::<f64>()
            .unwrap_or(0.0);

        return self
            .selected
            .iter()
            .map(|seat_number| {
                return self
                    .seats
                    .iter()
                    .find(|seat| return &seat.seat_number == seat_number)
                    .and_then(|seat| return seat.price)
                    .unwrap_or(fallback);
            })
            .sum();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub booking: Booking,
    pub payment: Payment,
}

/// Booking plus payment as one logical transaction. When the payment step
/// fails the freshly created booking is cancelled instead of being left
/// dangling in pending.
pub struct Checkout {
    client: GatewayClient,
}

impl Default for Checkout {
    fn default() -> Checkout {
        return Checkout::new(GatewayClient::default());
    }
}

impl Checkout {
    pub fn new(client: GatewayClient) -> Checkout {
        return Checkout { client };
    }

    pub async fn load_seats(&self, showtime_id: &str) -> Result<SeatPlan> {
        let seats = self.client.seats_for_showtime(showtime_id).await?;
        return Ok(SeatPlan::new(seats));
    }

    pub async fn submit(
        &self,
        session: &Session,
        showtime_id: &str,
        plan: &SeatPlan,
        payment_method: &str,
    ) -> Result<CheckoutReceipt> {
        if session.customer_id.is_empty() {
            bail!("Sign in before booking");
        }
        if plan.selected().is_empty() {
            bail!("Select at least one seat");
        }

        let mut movie_id = Config::get(ConfigKey::SelectedMovieID);
        if movie_id.is_empty() {
            movie_id = plan.movie_id().unwrap_or_default();
        }
        if movie_id.is_empty() {
            bail!("No movie information for this showtime");
        }

        // A seat can have been taken since the list was fetched; reject
        // before creating anything.
        self.client.check_seats(showtime_id, plan.selected()).await?;

        let booking = self
            .client
            .create_booking(&BookingRequest {
                customer_id: session.customer_id.clone(),
                movie_id,
                showtime_id: showtime_id.to_string(),
                seats: plan.selected().to_vec(),
                total_amount: plan.total(),
                status: BookingStatus::Pending,
            })
            .await?;

        let payment_res = self
            .client
            .create_payment(&PaymentRequest {
                booking_id: booking.id.clone(),
                amount: booking.total_amount,
                payment_method: payment_method.to_string(),
                status: PaymentStatus::Pending,
            })
            .await;

        let payment = match payment_res {
            Ok(payment) => payment,
            Err(err) => {
                // Compensate so the booking does not linger half-done.
                if let Err(cancel_err) = self
                    .client
                    .update_booking_status(&booking.id, BookingStatus::Cancelled)
                    .await
                {
                    tracing::error!(
                        error = ?cancel_err,
                        booking_id = booking.id,
                        "Failed to cancel booking after payment failure"
                    );
                }
                return Err(err);
            }
        };

        return Ok(CheckoutReceipt { booking, payment });
    }
}
