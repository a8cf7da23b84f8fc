use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct Smiles {
    pub smiles: Option<String>,
}
