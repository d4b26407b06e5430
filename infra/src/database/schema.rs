//! Table definitions created at startup

/// OTP records, one row per email
///
/// `utf8mb4_bin` keeps the email key case-sensitive.
pub const CREATE_OTP_CODES: &str = r#"
    CREATE TABLE IF NOT EXISTS otp_codes (
        email VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        name VARCHAR(255) NULL,
        code SMALLINT UNSIGNED NOT NULL,
        issued_at DATETIME(3) NOT NULL,
        PRIMARY KEY (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

pub const CREATE_COURSES: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        id CHAR(36) NOT NULL,
        name VARCHAR(255) NOT NULL,
        details TEXT NOT NULL,
        duration VARCHAR(64) NOT NULL,
        course_image_url VARCHAR(1024) NOT NULL,
        course_image_public_id VARCHAR(255) NULL,
        brochure_url VARCHAR(1024) NOT NULL,
        brochure_public_id VARCHAR(255) NULL,
        category VARCHAR(64) NULL,
        trainer VARCHAR(64) NULL,
        is_published BOOLEAN NOT NULL DEFAULT TRUE,
        created_at DATETIME(3) NOT NULL,
        PRIMARY KEY (id),
        KEY idx_courses_created_at (created_at)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Statements run in order by `DatabasePool::ensure_schema`
pub const SCHEMA_STATEMENTS: [&str; 2] = [CREATE_OTP_CODES, CREATE_COURSES];
