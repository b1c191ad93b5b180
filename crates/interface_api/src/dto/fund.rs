//! Fund DTOs
//!
//! Financial attributes are served pre-formatted through the shared
//! normalizers, so API consumers render exactly the text the directory's
//! own pages render — including the "Not disclosed" vs "None" fee
//! distinction, which raw numbers cannot carry.

use serde::Serialize;

use core_kernel::format_currency_value;
use domain_comparison::{
    format_fund_size, format_management_fee, format_performance_fee, format_redemption_fee,
    format_subscription_fee, return_target_display,
};
use domain_fund::Fund;

#[derive(Debug, Serialize)]
pub struct FundResponse {
    pub id: String,
    pub name: String,
    pub manager_name: String,
    pub category: String,
    pub minimum_investment: String,
    pub management_fee: String,
    pub performance_fee: String,
    pub subscription_fee: String,
    pub redemption_fee: String,
    pub return_target: Option<String>,
    pub fund_size: String,
    pub established: Option<i32>,
    pub term: Option<u32>,
    pub is_verified: bool,
    pub tags: Vec<String>,
}

impl From<&Fund> for FundResponse {
    fn from(fund: &Fund) -> Self {
        Self {
            id: fund.id.to_string(),
            name: fund.name.clone(),
            manager_name: fund.manager_name.clone(),
            category: fund.category.clone(),
            minimum_investment: format_currency_value(fund.minimum_investment),
            management_fee: format_management_fee(fund.management_fee),
            performance_fee: format_performance_fee(fund.performance_fee),
            subscription_fee: format_subscription_fee(fund.subscription_fee),
            redemption_fee: format_redemption_fee(fund.redemption_fee),
            return_target: return_target_display(fund),
            fund_size: format_fund_size(fund.fund_size),
            established: fund.established,
            term: fund.term,
            is_verified: fund.is_verified,
            tags: fund.tags.clone(),
        }
    }
}
