pub mod aluno_form;
pub mod alunos_list;
pub mod calendar;
pub mod header;
pub mod lesson_agenda;
pub mod login_form;
pub mod signup_form;
