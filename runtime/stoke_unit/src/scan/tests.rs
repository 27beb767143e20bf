use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scans_namespaced_class() {
    let decls = scan_unit(
        r"
        namespace App\Models;

        class User {
            // body text is not parsed
            $name = 'guest';
        }
        ",
    )
    .unwrap();

    assert_eq!(decls.names().collect::<Vec<_>>(), vec!["App\\Models\\User"]);
    let user = decls.get("App\\Models\\User").unwrap();
    assert_eq!(user.kind, DefKind::Class);
    assert!(user.dependencies.is_empty());
    assert_eq!(user.init, None);
}

#[test]
fn unit_without_namespace_declares_root_symbols() {
    let decls = scan_unit("interface Jsonable {} trait HasRoles {}").unwrap();
    assert_eq!(
        decls.names().collect::<Vec<_>>(),
        vec!["Jsonable", "HasRoles"]
    );
    assert_eq!(decls.definitions[0].kind, DefKind::Interface);
    assert_eq!(decls.definitions[1].kind, DefKind::Trait);
}

#[test]
fn dependencies_follow_name_resolution_rules() {
    let decls = scan_unit(
        r"
        namespace App\Models;
        use App\Support\Model;
        use Vendor\Casts as C;

        class User extends Model implements \Jsonable, C\Castable, Auditable {}
        ",
    )
    .unwrap();

    assert_eq!(
        decls.definitions[0].dependencies,
        vec![
            "App\\Support\\Model".to_string(),
            "Jsonable".to_string(),
            "Vendor\\Casts\\Castable".to_string(),
            "App\\Models\\Auditable".to_string(),
        ]
    );
}

#[test]
fn init_block_collects_requires() {
    let decls = scan_unit(
        r"
        namespace App\Models;

        class User {
            init {
                require Role;
                if (ready) { require \Cache\Store; }
            }
            function init_other() {}
        }
        ",
    )
    .unwrap();

    let init = decls.definitions[0].init.as_ref().unwrap();
    assert_eq!(
        init.requires,
        vec!["App\\Models\\Role".to_string(), "Cache\\Store".to_string()]
    );
}

#[test]
fn nested_init_keyword_is_not_an_initializer() {
    let decls = scan_unit("class A { function boot() { init { require B; } } }").unwrap();
    assert_eq!(decls.definitions[0].init, None);
}

#[test]
fn several_namespaces_per_unit() {
    let decls = scan_unit(
        r"
        namespace First; use Other\Thing;
        class A extends Thing {}
        namespace Second;
        class B extends Thing {}
        ",
    )
    .unwrap();

    assert_eq!(decls.names().collect::<Vec<_>>(), vec!["First\\A", "Second\\B"]);
    // Imports do not survive a namespace change.
    assert_eq!(decls.definitions[0].dependencies, vec!["Other\\Thing".to_string()]);
    assert_eq!(decls.definitions[1].dependencies, vec!["Second\\Thing".to_string()]);
}

#[test]
fn top_level_blocks_are_skipped() {
    let decls = scan_unit("function helper() { class_like { } } class A {}").unwrap();
    assert_eq!(decls.names().collect::<Vec<_>>(), vec!["A"]);
}

#[test]
fn missing_name_is_a_defect() {
    let err = scan_unit("class {}").unwrap_err();
    assert_eq!(
        err,
        UnitDefect::ExpectedName {
            keyword: "class",
            span: Span::new(0, 5),
        }
    );
}

#[test]
fn missing_semicolon_is_a_defect() {
    let err = scan_unit("namespace App\\Models class A {}").unwrap_err();
    assert_eq!(err.to_string(), "expected `;` after `namespace App\\Models`");
}

#[test]
fn missing_body_is_a_defect() {
    let err = scan_unit("class A;").unwrap_err();
    assert!(matches!(err, UnitDefect::ExpectedBody { ref name, .. } if name == "A"));
}

#[test]
fn qualified_definition_name_is_a_defect() {
    let err = scan_unit("class App\\User {}").unwrap_err();
    assert!(matches!(err, UnitDefect::QualifiedName { .. }));
}

#[test]
fn unclosed_body_points_at_open_brace() {
    let source = "namespace A;\nclass B {\n  init { require C; }\n";
    let err = scan_unit(source).unwrap_err();
    assert_eq!(err.to_string(), "unclosed body for class `A\\B`");
    assert_eq!(err.span().line_col(source), (2, 9));
}

#[test]
fn unclosed_init_block_is_a_defect() {
    let err = scan_unit("class B { init { require C;").unwrap_err();
    assert!(matches!(err, UnitDefect::UnclosedBlock { .. }));
}

#[test]
fn stray_close_brace_is_a_defect() {
    let err = scan_unit("class A {} }").unwrap_err();
    assert_eq!(err, UnitDefect::UnexpectedCloseBrace { span: Span::new(11, 12) });
}

#[test]
fn empty_unit_declares_nothing() {
    assert_eq!(scan_unit("// nothing here\n").unwrap(), UnitDecls::default());
}
