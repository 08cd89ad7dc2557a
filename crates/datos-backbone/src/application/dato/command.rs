pub(crate) struct CreatingDatoCommand {
    pub nombre: String,
    pub valor: i32,
}

pub(crate) struct UpdatingDatoCommand {
    pub nombre: String,
    pub valor: i32,
}
