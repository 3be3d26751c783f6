//! # Localization
//!
//! Display strings for every label, button, placeholder and validation message
//! in the directory, in English and Turkish.
//!
//! Keys are typed ([`MessageKey`]) so a missing translation is a compile error
//! rather than a blank label. The active [`Language`] is persisted by the
//! caller through [`crate::store::KeyValueBackend`]; see [`load_language`] and
//! [`save_language`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::{KeyValueBackend, StoreError};

/// Languages the directory can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish,
}

impl Language {
    /// ISO 639-1 code, as persisted
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "tr" => Some(Language::Turkish),
            _ => None,
        }
    }

    /// The language the selector switches to
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Turkish,
            Language::Turkish => Language::English,
        }
    }

    pub fn translate(self, key: MessageKey) -> &'static str {
        match self {
            Language::English => english(key),
            Language::Turkish => turkish(key),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read the persisted language, falling back to `default` when nothing usable
/// is stored
pub fn load_language<B: KeyValueBackend>(backend: &B, key: &str, default: Language) -> Language {
    match backend.get_item(key) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
            warn!("Ignoring unknown stored language '{}'", code);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            warn!("Failed to read language preference: {}", e);
            default
        }
    }
}

pub fn save_language<B: KeyValueBackend>(backend: &B, key: &str, language: Language) -> Result<(), StoreError> {
    debug!("Persisting language preference: {}", language);
    backend.set_item(key, language.code())
}

/// Every translatable string in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Navigation
    Employees,
    AddEmployee,
    EditEmployee,
    UpdateEmployee,

    // Field labels
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    EmploymentDate,
    DateOfBirth,
    Actions,

    // Select options
    SelectDepartment,
    Tech,
    Analytics,
    SelectPosition,
    Junior,
    Medior,
    Senior,

    // List view
    SearchPlaceholder,
    ListView,
    TableView,
    NoResults,
    PreviousPage,
    NextPage,

    // Confirmation
    ConfirmDelete,
    DeleteDetail,
    ConfirmSubmit,
    AreYouSureSubmit,
    Yes,
    No,
    Close,
    Edit,
    Delete,

    // Validation
    FirstNameRequired,
    LastNameRequired,
    EmailRequired,
    InvalidEmail,
    PhoneRequired,
    InvalidPhone,
    DepartmentRequired,
    PositionRequired,
    EmploymentDateRequired,
    DateOfBirthRequired,

    // Language selector
    SwitchLanguage,
}

impl MessageKey {
    /// Label for a department value stored on a record
    pub fn for_department(value: &str) -> Option<MessageKey> {
        match value {
            "Tech" => Some(MessageKey::Tech),
            "Analytics" => Some(MessageKey::Analytics),
            _ => None,
        }
    }

    /// Label for a position value stored on a record
    pub fn for_position(value: &str) -> Option<MessageKey> {
        match value {
            "Junior" => Some(MessageKey::Junior),
            "Medior" => Some(MessageKey::Medior),
            "Senior" => Some(MessageKey::Senior),
            _ => None,
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        Employees => "Employees",
        AddEmployee => "Add New",
        EditEmployee => "Edit Employee",
        UpdateEmployee => "Update Employee",

        FirstName => "First Name",
        LastName => "Last Name",
        Email => "Email",
        Phone => "Phone",
        Department => "Department",
        Position => "Position",
        EmploymentDate => "Date of Employment",
        DateOfBirth => "Date of Birth",
        Actions => "Actions",

        SelectDepartment => "Select Department",
        Tech => "Tech",
        Analytics => "Analytics",
        SelectPosition => "Select Position",
        Junior => "Junior",
        Medior => "Medior",
        Senior => "Senior",

        SearchPlaceholder => "Search employees...",
        ListView => "List View",
        TableView => "Table View",
        NoResults => "No employees found",
        PreviousPage => "Previous page",
        NextPage => "Next page",

        ConfirmDelete => "Are you sure?",
        DeleteDetail => "The selected employee record will be deleted.",
        ConfirmSubmit => "Confirm",
        AreYouSureSubmit => "Do you want to save this employee?",
        Yes => "Proceed",
        No => "Cancel",
        Close => "Close",
        Edit => "Edit",
        Delete => "Delete",

        FirstNameRequired => "First name is required",
        LastNameRequired => "Last name is required",
        EmailRequired => "Email is required",
        InvalidEmail => "Please enter a valid email address",
        PhoneRequired => "Phone number is required",
        InvalidPhone => "Phone number may only contain digits",
        DepartmentRequired => "Department is required",
        PositionRequired => "Position is required",
        EmploymentDateRequired => "Date of employment is required",
        DateOfBirthRequired => "Date of birth is required",

        SwitchLanguage => "Türkçe",
    }
}

fn turkish(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        Employees => "Çalışanlar",
        AddEmployee => "Yeni Ekle",
        EditEmployee => "Çalışanı Düzenle",
        UpdateEmployee => "Çalışanı Güncelle",

        FirstName => "Ad",
        LastName => "Soyad",
        Email => "E-posta",
        Phone => "Telefon",
        Department => "Departman",
        Position => "Pozisyon",
        EmploymentDate => "İşe Giriş Tarihi",
        DateOfBirth => "Doğum Tarihi",
        Actions => "İşlemler",

        SelectDepartment => "Departman Seçin",
        Tech => "Teknoloji",
        Analytics => "Analitik",
        SelectPosition => "Pozisyon Seçin",
        Junior => "Junior",
        Medior => "Medior",
        Senior => "Senior",

        SearchPlaceholder => "Çalışan ara...",
        ListView => "Liste Görünümü",
        TableView => "Tablo Görünümü",
        NoResults => "Çalışan bulunamadı",
        PreviousPage => "Önceki sayfa",
        NextPage => "Sonraki sayfa",

        ConfirmDelete => "Emin misiniz?",
        DeleteDetail => "Seçilen çalışan kaydı silinecek.",
        ConfirmSubmit => "Onayla",
        AreYouSureSubmit => "Bu çalışanı kaydetmek istiyor musunuz?",
        Yes => "Devam Et",
        No => "İptal",
        Close => "Kapat",
        Edit => "Düzenle",
        Delete => "Sil",

        FirstNameRequired => "Ad zorunludur",
        LastNameRequired => "Soyad zorunludur",
        EmailRequired => "E-posta zorunludur",
        InvalidEmail => "Lütfen geçerli bir e-posta adresi girin",
        PhoneRequired => "Telefon numarası zorunludur",
        InvalidPhone => "Telefon numarası yalnızca rakam içerebilir",
        DepartmentRequired => "Departman zorunludur",
        PositionRequired => "Pozisyon zorunludur",
        EmploymentDateRequired => "İşe giriş tarihi zorunludur",
        DateOfBirthRequired => "Doğum tarihi zorunludur",

        SwitchLanguage => "English",
    }
}
