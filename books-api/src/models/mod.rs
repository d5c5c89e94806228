//! Wire models for the remote bookkeeping API.

mod contact;
mod invoice;
mod payment;
mod product;
mod quotation;
mod settings;
mod statement;
mod user;

pub use contact::{Contact, ContactInput, ContactKind};
pub use invoice::{Invoice, InvoiceInput, InvoiceKind, InvoiceStatus, LineItem, LineItemInput};
pub use payment::{PaymentInput, PaymentVoucher, Receipt};
pub use product::{Product, ProductInput};
pub use quotation::{Quotation, QuotationInput, QuotationStatus};
pub use settings::{CompanySettings, DocumentCounter, DocumentSettings};
pub use statement::{AccountStatement, Currency, LedgerEntry};
pub use user::{Role, User, UserInput};
