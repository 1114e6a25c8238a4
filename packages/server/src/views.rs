use tera::Tera;

/// Page templates, compiled into the binary.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    (
        "edit-cupcake-form.html",
        include_str!("../templates/edit-cupcake-form.html"),
    ),
    ("error.html", include_str!("../templates/error.html")),
];

/// Browser client served at `/static/cupcakes.js`.
pub const CLIENT_SCRIPT: &str = include_str!("../static/cupcakes.js");

/// Build the template set. `.html` templates are autoescaped.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}
