//! Общие типы фронтенда и бэкенда: модель выбора размеров, пресеты,
//! правила именования вариантов и контракты UseCase.

pub mod domain;
pub mod shared;
pub mod usecases;
