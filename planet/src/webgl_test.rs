use std::cell::RefCell;

use super::*;

/// Records shader lifetimes and fails at a chosen step.
#[derive(Default)]
struct FakeLinker {
    fail_at: Option<&'static str>,
    live: RefCell<Vec<&'static str>>,
}

impl FakeLinker {
    fn failing_at(step: &'static str) -> Self {
        Self { fail_at: Some(step), ..Self::default() }
    }

    fn live_shaders(&self) -> Vec<&'static str> {
        self.live.borrow().clone()
    }
}

impl ShaderLinker for FakeLinker {
    type Shader = &'static str;
    type Program = (&'static str, &'static str);

    fn compile(&self, kind: u32, _source: &str) -> Result<&'static str, PlanetError> {
        let name = if kind == Gl::VERTEX_SHADER { "vs" } else { "fs" };
        if self.fail_at == Some(name) {
            return Err(PlanetError::Shader(format!("{name} failed")));
        }
        self.live.borrow_mut().push(name);
        Ok(name)
    }

    fn link(&self, vs: &&'static str, fs: &&'static str) -> Result<(&'static str, &'static str), PlanetError> {
        if self.fail_at == Some("link") {
            return Err(PlanetError::Shader("link failed".into()));
        }
        Ok((*vs, *fs))
    }

    fn delete_shader(&self, shader: &&'static str) {
        self.live.borrow_mut().retain(|s| s != shader);
    }
}

#[test]
fn linked_program_leaves_no_shaders() {
    let linker = FakeLinker::default();
    assert_eq!(build_program(&linker, "v", "f").unwrap(), ("vs", "fs"));
    assert!(linker.live_shaders().is_empty());
}

#[test]
fn fragment_failure_deletes_vertex_shader() {
    let linker = FakeLinker::failing_at("fs");
    assert!(matches!(build_program(&linker, "v", "f"), Err(PlanetError::Shader(m)) if m == "fs failed"));
    assert!(linker.live_shaders().is_empty());
}

#[test]
fn link_failure_deletes_both_shaders() {
    let linker = FakeLinker::failing_at("link");
    assert!(matches!(build_program(&linker, "v", "f"), Err(PlanetError::Shader(_))));
    assert!(linker.live_shaders().is_empty());
}

#[test]
fn vertex_failure_compiles_nothing_else() {
    let linker = FakeLinker::failing_at("vs");
    assert!(build_program(&linker, "v", "f").is_err());
    assert!(linker.live_shaders().is_empty());
}
