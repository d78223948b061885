//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application. User-facing strings are kept in Russian, matching the Mini App.

// Input shapes
pub const BIRTH_DATE_LENGTH: usize = 10;
pub const MAX_BIRTH_DATE_DIGITS: usize = 8;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const VERIFICATION_CODE_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Avatar intake
pub const AVATAR_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
pub const AVATAR_MAX_DIMENSION: u32 = 512;
pub const AVATAR_JPEG_QUALITY: u8 = 85;

// Backend
pub const LOCAL_DEV_ORIGINS: [&str; 2] = ["http://localhost:8000", "http://127.0.0.1:8000"];
pub const PSYCHOMATRIX_MARKER: &str = "ПСИХОМАТРИЦА:";
pub const AI_STATUS_OK: &str = "ok";

// Display defaults
pub const DEFAULT_USER_NAME: &str = "Пользователь";
pub const GUEST_LABEL: &str = "Гость";
pub const EMPTY_CELL_PLACEHOLDER: &str = "–";
pub const TARIFF_NOT_SELECTED: &str = "Не выбран";

/// User-facing messages.
pub mod messages {
    pub const REQUEST_FAILED: &str = "Ошибка запроса";
    pub const PROFILE_LOAD_FAILED: &str = "Ошибка загрузки профиля";
    pub const PROFILE_UPDATE_FAILED: &str = "Ошибка обновления профиля";

    pub const MATRIX_FAILED: &str = "Ошибка при расчёте матрицы";
    pub const CALCULATION_FAILED: &str = "Ошибка при расчёте";
    pub const CALCULATORS_LOCKED: &str =
        "Раздел «Калькуляторы» доступен в тарифе Профессиональный.";

    pub const AI_DATE_REQUIRED: &str = "Введите дату рождения в формате ДД.ММ.ГГГГ";
    pub const AI_NOT_GENERATED: &str = "Не удалось сгенерировать отчёт";
    pub const AI_GENERIC_FAILURE: &str =
        "Произошла ошибка при генерации отчёта. Попробуйте позже.";
    pub const AI_KNOWLEDGE_BASE_MISSING: &str = "AI база знаний ещё не инициализирована. \
         Попросите администратора запустить индексацию книг.";
    pub const AI_OPENAI_FAILURE: &str =
        "Ошибка при генерации отчёта. Проверьте настройки OpenAI API.";

    pub const FILL_ALL_FIELDS: &str = "Заполните все поля";
    pub const INVALID_EMAIL: &str = "Неверный формат email";
    pub const INVALID_CREDENTIALS: &str = "⚠️ Неверный e-mail или пароль";
    pub const NAME_REQUIRED: &str = "Имя обязательно";
    pub const EMAIL_REQUIRED: &str = "Email обязателен";
    pub const INVALID_PHONE: &str = "Телефон должен содержать от 7 до 15 цифр";
    pub const INVALID_BIRTH_DATE: &str = "Дата рождения должна быть в формате дд.мм.гггг";
    pub const PASSWORD_TOO_SHORT: &str = "Пароль должен быть не короче 6 символов";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Пароли не совпадают";
    pub const REGISTRATION_FAILED: &str = "Ошибка регистрации";
    pub const INVALID_CODE_LENGTH: &str = "Введите 6-значный код";
    pub const INVALID_CODE: &str = "Неверный код";
    pub const PASSWORD_RESET_UNAVAILABLE: &str = "Функция восстановления пароля появится позже…";
    pub const BIRTH_DATE_MISSING: &str = "Укажите дату рождения в профиле";

    pub const AVATAR_NOT_IMAGE: &str = "Файл должен быть изображением";
    pub const AVATAR_TOO_LARGE: &str = "Размер файла не должен превышать 5MB";
    pub const AVATAR_DECODE_FAILED: &str = "Ошибка загрузки изображения";
    pub const AVATAR_ENCODE_FAILED: &str = "Не удалось сжать изображение";
    pub const AVATAR_READ_FAILED: &str = "Ошибка чтения файла";
    pub const AVATAR_NO_PROFILE: &str = "Войдите в профиль, чтобы загрузить аватар";
}
