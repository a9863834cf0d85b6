//! Form drafts and their validation.
//!
//! A draft holds whatever the operator typed so far. `validate()` trims and
//! checks it and yields the payload the backend expects.

use crate::errors::{ValidationError, MIN_PASSWORD_LEN};
use crate::pricing::final_price;
use crate::{
    Amount, Article, ArticlePayload, CategoryId, CategoryPayload, ChangePasswordData,
    ExtractionData, PaymentMethod, ProviderId, ProviderPayload, RegisterSellerData,
};

/// Article create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    unit_price: Amount,
    profit_margin: i64,
    final_price: Amount,
    pub stock: i64,
    pub category_id: Option<CategoryId>,
    pub provider_id: Option<ProviderId>,
}

impl ArticleDraft {
    /// Empty form for a new article.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with an existing article.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            unit_price: article.unit_price,
            profit_margin: article.profit_margin,
            final_price: article.final_price,
            stock: article.stock,
            category_id: Some(article.category_id),
            provider_id: Some(article.provider_id),
        }
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn profit_margin(&self) -> i64 {
        self.profit_margin
    }

    pub fn final_price(&self) -> Amount {
        self.final_price
    }

    /// Change the cost; the final price follows.
    pub fn set_unit_price(&mut self, cost: Amount) {
        self.unit_price = cost;
        self.final_price = final_price(cost, self.profit_margin);
    }

    /// Change the margin; the final price follows.
    pub fn set_profit_margin(&mut self, margin: i64) {
        self.profit_margin = margin;
        self.final_price = final_price(self.unit_price, margin);
    }

    /// Override the derived final price. Cost and margin are kept as typed.
    pub fn set_final_price(&mut self, price: Amount) {
        self.final_price = price;
    }

    pub fn validate(&self) -> Result<ArticlePayload, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        let category_id = self
            .category_id
            .ok_or(ValidationError::MissingField("category"))?;
        let provider_id = self
            .provider_id
            .ok_or(ValidationError::MissingField("provider"))?;
        if self.unit_price < 0 {
            return Err(ValidationError::Negative("unit price"));
        }
        if self.final_price < 0 {
            return Err(ValidationError::Negative("final price"));
        }
        if self.stock < 0 {
            return Err(ValidationError::Negative("stock"));
        }

        Ok(ArticlePayload {
            title: title.to_string(),
            content: self.content.trim().to_string(),
            unit_price: self.unit_price,
            profit_margin: self.profit_margin,
            final_price: self.final_price,
            stock: self.stock,
            category_id,
            provider_id,
        })
    }
}

/// Category create/rename form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<CategoryPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        Ok(CategoryPayload {
            name: name.to_string(),
        })
    }
}

/// Provider create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderDraft {
    pub name: String,
    pub contact_info: String,
}

impl ProviderDraft {
    pub fn validate(&self) -> Result<ProviderPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        let contact = self.contact_info.trim();
        Ok(ProviderPayload {
            name: name.to_string(),
            contact_info: (!contact.is_empty()).then(|| contact.to_string()),
        })
    }
}

/// Cash extraction form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionDraft {
    pub amount: Amount,
    pub reason: String,
    pub person: String,
    pub payment_method: Option<PaymentMethod>,
}

impl ExtractionDraft {
    pub fn validate(&self) -> Result<ExtractionData, ValidationError> {
        if self.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        let person = self.person.trim();
        if person.is_empty() {
            return Err(ValidationError::MissingField("person"));
        }
        Ok(ExtractionData {
            amount: self.amount,
            reason: self.reason.trim().to_string(),
            person: person.to_string(),
            payment_method: self.payment_method,
        })
    }
}

/// Password change form, with the confirmation field the backend never sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<ChangePasswordData, ValidationError> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(ChangePasswordData {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Seller registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SellerDraft {
    pub fn validate(&self) -> Result<RegisterSellerData, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ValidationError::InvalidEmail(email.to_string())),
        }
        // Without a password the backend assigns its default one.
        let password = (!self.password.is_empty()).then(|| self.password.clone());
        Ok(RegisterSellerData {
            username: username.to_string(),
            email: email.to_string(),
            password,
        })
    }
}
