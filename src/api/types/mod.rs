pub mod bank;
pub mod beneficiary;
pub mod card;
pub mod currency_swap;
pub mod customer;
pub mod deposit;
pub mod kyc;
pub mod payment_card;
pub mod payout;
pub mod transaction;
pub mod transfer;
pub mod wallet;
pub mod withdrawal;
pub mod yield_offering;

pub use bank::{
    AccountOpeningFilter, AccountOpeningRequest, AccountResolveRequest, AllAccountOpeningRequests,
    BankAccount, BankCode, GenerateBankAccountRequest,
};
pub use beneficiary::{AllBeneficiariesResponse, CreateBeneficiaryRequest, TransferBeneficiary};
pub use card::{
    AllCardsResponse, BillingAddress, Card, CardIdentity, CreateCustomerCardRequest,
    CustomerPaymentSessionRequest, CustomerPaymentSessionResponse, FreezeCardRequest,
    FundCustomerCardRequest, VaultedCardDetails,
};
pub use currency_swap::{
    AllSwapsResponse, CurrencySwap, CurrencySwapFilter, InitiateCurrencySwapRequest,
};
pub use customer::{
    AllCustomersResponse, CreateCustomerRequest, Customer, CustomerBalance, CustomerBalances,
    CustomerInfo, CustomerType, UpdateCustomerRequest,
};
pub use deposit::{
    Deposit, DepositBatch, DepositBatchResponse, DepositLookup, FundTransferAction,
    FundTransferRequest, InitiateDepositRequest, IntraTransferRequest, IntraTransferResponse,
    TransferParty,
};
pub use kyc::{KycDocument, KycRecord, VerifyCustomerKycRequest, VerifyCustomerKycResponse};
pub use payment_card::{
    AllPaymentCardsResponse, CompleteCardRequest, DebitPaymentCardRequest,
    GetLinkToAddCardRequest, InitiateCardRequest, PaymentCard, PaymentCardFilter,
    PaymentCardType,
};
pub use payout::{
    AllPayoutsResponse, BulkPayoutConfig, BulkPayoutRecipientAccount, CancelPayoutRequest,
    InitiateBulkPayoutRequest, PayoutAccount, PayoutDetails, PayoutFilter, PayoutResponse,
    PayoutType,
};
pub use transaction::{
    AllTransactionsResponse, Destination, Transaction, TransactionFilter, TransactionItems,
};
pub use transfer::{
    AllTransfersResponse, InitiateTerminalTransferRequest, InitiateTransferRequest,
    TerminalTransfer, Transfer, TransferDestination, TransferFilter,
};
pub use wallet::{CustomerWallet, CustomerWalletRequest, SupportedAsset};
pub use withdrawal::{
    BankDetail, FeeType, FeeWithdrawal, FeeWithdrawalRequest, InitiateWithdrawalRequest,
    WalletDetail, Withdrawal, WithdrawalRequest,
};
pub use yield_offering::{
    CreateYieldOfferingProfileRequest, Portfolio, UpdateYieldOfferingProfileRequest,
    YieldOfferingProfile,
};
