use super::SelectOption;

/// Currencies offered in the search form. All amounts from the model are USD.
pub const CURRENCIES: &[SelectOption] = &[
    SelectOption { value: "USD", label: "USD ($)" },
    SelectOption { value: "EUR", label: "EUR (€)" },
    SelectOption { value: "GBP", label: "GBP (£)" },
    SelectOption { value: "INR", label: "INR (₹)" },
    SelectOption { value: "CAD", label: "CAD (C$)" },
    SelectOption { value: "AUD", label: "AUD (A$)" },
    SelectOption { value: "JPY", label: "JPY (¥)" },
];
