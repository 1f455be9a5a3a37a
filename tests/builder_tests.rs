use blockshift::algorithm::{construir_bloques, modulo_desde_rango};
use blockshift::models::SeccionNI;

fn seccion(materia: &str, tipo: &str, nrc: &str, dia: &str, horario: &str, vacantes: i32) -> SeccionNI {
    SeccionNI {
        materia: materia.to_string(),
        codigo_materia: String::new(),
        nrc: nrc.to_string(),
        seccion: "1".to_string(),
        n_curso: "101".to_string(),
        tipo: tipo.to_string(),
        componente: tipo.to_string(),
        dia_norm: dia.to_string(),
        horario_texto: horario.to_string(),
        modulo: modulo_desde_rango(horario).unwrap_or(0),
        vacantes,
        ni_an: "NI".to_string(),
        carrera: "Enfermeria".to_string(),
        ubicacion: String::new(),
    }
}

#[test]
fn una_materia_una_seccion_da_un_bloque() {
    let secciones = vec![seccion("Quimica", "TEO", "1000", "lunes", "08:00 - 09:20", 30)];
    let bloques = construir_bloques(&secciones);

    assert_eq!(bloques.len(), 1);
    assert_eq!(bloques[0].size, 30);
    assert_eq!(bloques[0].secciones.len(), 1);
    assert_eq!(bloques[0].secciones[0].nrc, "1000");
}

#[test]
fn elige_la_seccion_con_mas_vacantes_y_termina_al_agotar_una_materia() {
    // A tiene una sola sección (20); B tiene dos espejo (15 y 25) sin choque
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 20),
        seccion("Materia B", "TEO", "3000", "martes", "09:30 - 10:50", 15),
        seccion("Materia B", "TEO", "3001", "martes", "11:00 - 12:20", 25),
    ];
    let bloques = construir_bloques(&secciones);

    // primer bloque: A-2000 y B-3001 (la de 25), tamaño min(20, 25) = 20;
    // A queda en 0 y no se puede formar otro bloque
    assert_eq!(bloques.len(), 1);
    assert_eq!(bloques[0].size, 20);
    let nrcs: Vec<&str> = bloques[0].secciones.iter().map(|s| s.nrc.as_str()).collect();
    assert_eq!(nrcs, vec!["2000", "3001"]);
}

#[test]
fn entrada_vacia_da_salida_vacia() {
    let bloques = construir_bloques(&[]);
    assert!(bloques.is_empty());
}

#[test]
fn es_idempotente_sobre_la_misma_entrada() {
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 20),
        seccion("Materia A", "TEO", "2001", "lunes", "09:30 - 10:50", 18),
        seccion("Materia B", "TEO", "3000", "martes", "09:30 - 10:50", 15),
        seccion("Materia B", "LAB", "3100", "martes", "14:00 - 15:20", 12),
    ];
    let primera = construir_bloques(&secciones);
    let segunda = construir_bloques(&secciones);

    assert_eq!(
        serde_json::to_value(&primera).unwrap(),
        serde_json::to_value(&segunda).unwrap()
    );
}

#[test]
fn nunca_consume_mas_vacantes_de_las_originales() {
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 17),
        seccion("Materia A", "TEO", "2001", "lunes", "09:30 - 10:50", 23),
        seccion("Materia B", "TEO", "3000", "martes", "08:00 - 09:20", 14),
        seccion("Materia B", "TEO", "3001", "martes", "09:30 - 10:50", 19),
        seccion("Materia C", "TAL", "4000", "viernes", "11:00 - 12:20", 40),
    ];
    let bloques = construir_bloques(&secciones);
    assert!(!bloques.is_empty());

    for original in &secciones {
        let consumido: i32 = bloques
            .iter()
            .filter(|b| b.secciones.iter().any(|s| s.nrc == original.nrc))
            .map(|b| b.size)
            .sum();
        assert!(
            consumido <= original.vacantes,
            "NRC {} consumió {} de {} vacantes",
            original.nrc,
            consumido,
            original.vacantes
        );
    }
}

#[test]
fn cada_bloque_cubre_cada_materia_tipo_exactamente_una_vez() {
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 30),
        seccion("Materia A", "LAB", "2100", "lunes", "14:00 - 15:20", 25),
        seccion("Materia B", "TEO", "3000", "martes", "08:00 - 09:20", 28),
        seccion("Materia B", "TEO", "3001", "martes", "09:30 - 10:50", 28),
    ];
    let bloques = construir_bloques(&secciones);
    assert!(!bloques.is_empty());

    for bloque in &bloques {
        let mut claves: Vec<(String, String)> = bloque
            .secciones
            .iter()
            .map(|s| (s.materia.clone(), s.tipo.clone()))
            .collect();
        claves.sort();
        let antes = claves.len();
        claves.dedup();
        assert_eq!(antes, claves.len(), "materia-tipo duplicada en un bloque");
        assert_eq!(claves.len(), 3, "faltan materias-tipo en un bloque");
    }
}

#[test]
fn ningun_bloque_tiene_choques_entre_materias_distintas() {
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 30),
        seccion("Materia B", "TEO", "3000", "lunes", "08:00 - 09:20", 30),
        seccion("Materia B", "TEO", "3001", "lunes", "09:30 - 10:50", 10),
        seccion("Materia C", "TEO", "4000", "lunes", "11:00 - 12:20", 30),
    ];
    let bloques = construir_bloques(&secciones);
    assert!(!bloques.is_empty());

    for bloque in &bloques {
        for (i, a) in bloque.secciones.iter().enumerate() {
            for b in &bloque.secciones[i + 1..] {
                if a.materia == b.materia {
                    continue;
                }
                let choque = a.dia_norm == b.dia_norm
                    && a.modulo != 0
                    && a.modulo == b.modulo;
                assert!(!choque, "choque entre {} y {}", a.nrc, b.nrc);
            }
        }
    }
}

#[test]
fn evita_la_seccion_grande_si_choca_con_lo_ya_elegido() {
    // La sección espejo de B con más vacantes choca con A; debe tomar la otra
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 30),
        seccion("Materia B", "TEO", "3000", "lunes", "08:00 - 09:20", 50),
        seccion("Materia B", "TEO", "3001", "lunes", "09:30 - 10:50", 10),
    ];
    let bloques = construir_bloques(&secciones);

    assert!(!bloques.is_empty());
    let nrcs: Vec<&str> = bloques[0].secciones.iter().map(|s| s.nrc.as_str()).collect();
    assert_eq!(nrcs, vec!["2000", "3001"]);
    assert_eq!(bloques[0].size, 10);
}

#[test]
fn misma_materia_en_el_mismo_modulo_nunca_choca() {
    // TEO y TAL de la misma materia co-programadas en la misma celda
    let secciones = vec![
        seccion("Comunicacion Efectiva", "TEO", "5000", "lunes", "08:00 - 09:20", 10),
        seccion("Comunicacion Efectiva", "TAL", "5001", "lunes", "08:00 - 09:20", 10),
    ];
    let bloques = construir_bloques(&secciones);

    assert_eq!(bloques.len(), 1);
    assert_eq!(bloques[0].secciones.len(), 2);
    assert_eq!(bloques[0].size, 10);
}

#[test]
fn horarios_no_reconocidos_no_bloquean_la_construccion() {
    // Comportamiento heredado: rangos fuera de los 8 módulos canónicos no
    // participan del chequeo de choques, aunque se superpongan de verdad
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:15 - 09:35", 20),
        seccion("Materia B", "TEO", "3000", "lunes", "08:15 - 09:35", 20),
    ];
    let bloques = construir_bloques(&secciones);

    assert_eq!(bloques.len(), 1);
    assert_eq!(bloques[0].secciones.len(), 2);
}

#[test]
fn se_detiene_en_100_iteraciones_con_datos_patologicos() {
    // 150 secciones espejo de una misma materia-tipo, 1 vacante cada una:
    // daría 150 bloques de tamaño 1, pero el tope corta en 100
    let secciones: Vec<SeccionNI> = (0..150)
        .map(|i| {
            seccion(
                "Materia Unica",
                "TEO",
                &format!("9{:03}", i),
                "lunes",
                "08:00 - 09:20",
                1,
            )
        })
        .collect();
    let bloques = construir_bloques(&secciones);

    assert_eq!(bloques.len(), 100);
    assert!(bloques.iter().all(|b| b.size == 1));
}

#[test]
fn los_bloques_se_numeran_en_orden() {
    let secciones = vec![
        seccion("Materia A", "TEO", "2000", "lunes", "08:00 - 09:20", 10),
        seccion("Materia A", "TEO", "2001", "lunes", "09:30 - 10:50", 10),
    ];
    let bloques = construir_bloques(&secciones);

    assert_eq!(bloques.len(), 2);
    assert_eq!(bloques[0].nombre, "Bloque 1");
    assert_eq!(bloques[1].nombre, "Bloque 2");
}
