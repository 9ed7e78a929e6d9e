use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxExperienceRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxCertificationRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: SqlitePool,
}
