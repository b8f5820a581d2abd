/// Main avenues of Antofagasta, used as route endpoints.
pub const STREETS: [&str; 10] = [
    "Avenida Edmundo Pérez Zujovic",
    "Avenida Séptimo de Línea",
    "Avenida Aníbal Pinto",
    "Avenida José Manuel Balmaceda",
    "Avenida Grecia",
    "Avenida República de Croacia",
    "Avenida Ejército",
    "Avenida Jaime Guzmán",
    "Avenida Padre Alberto Hurtado",
    "Avenida Argentina",
];
