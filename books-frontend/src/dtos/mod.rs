//! Request DTOs for the frontend surface.
//!
//! These are validated at the edge with `validator`, then converted into the
//! wire input types of `books-api`. Amount-sign checks that `validator`
//! cannot express happen in the handlers.

use books_api::models::{
    ContactInput, InvoiceInput, LineItemInput, PaymentInput, ProductInput, QuotationInput, Role,
    UserInput,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Date-range filter for statement views. Bounds are inclusive calendar
/// dates; both default when absent (all history up to today).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatementQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub tax_number: Option<String>,
    pub opening_balance: Option<Decimal>,
}

impl ContactForm {
    pub fn into_input(self) -> ContactInput {
        ContactInput {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            tax_number: self.tax_number,
            opening_balance: self.opening_balance,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LineItemForm {
    pub product_id: Option<i64>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl LineItemForm {
    fn into_input(self) -> LineItemInput {
        LineItemInput {
            product_id: self.product_id,
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_rate: self.tax_rate,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceForm {
    pub contact_id: i64,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "At least one line item is required"))]
    #[validate(nested)]
    pub items: Vec<LineItemForm>,
    pub notes: Option<String>,
}

impl InvoiceForm {
    pub fn into_input(self) -> InvoiceInput {
        InvoiceInput {
            contact_id: self.contact_id,
            date: self.date,
            due_date: self.due_date,
            items: self.items.into_iter().map(LineItemForm::into_input).collect(),
            notes: self.notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuotationForm {
    pub customer_id: i64,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "At least one line item is required"))]
    #[validate(nested)]
    pub items: Vec<LineItemForm>,
    pub notes: Option<String>,
}

impl QuotationForm {
    pub fn into_input(self) -> QuotationInput {
        QuotationInput {
            customer_id: self.customer_id,
            date: self.date,
            expiry_date: self.expiry_date,
            items: self.items.into_iter().map(LineItemForm::into_input).collect(),
            notes: self.notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentForm {
    pub contact_id: i64,
    pub invoice_id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl PaymentForm {
    pub fn into_input(self) -> PaymentInput {
        PaymentInput {
            contact_id: self.contact_id,
            invoice_id: self.invoice_id,
            date: self.date,
            amount: self.amount,
            payment_method: self.payment_method,
            reference: self.reference,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub price: Decimal,
    pub cost: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

impl ProductForm {
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            code: self.code,
            name: self.name,
            description: self.description,
            unit: self.unit,
            price: self.price,
            cost: self.cost,
            tax_rate: self.tax_rate,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,
    pub role: Role,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl UserForm {
    pub fn into_input(self) -> UserInput {
        UserInput {
            username: self.username,
            display_name: self.display_name,
            role: self.role,
            email: self.email,
            password: self.password,
            active: self.active,
        }
    }
}
